//! CLI for resource-images - stock image resolution for campus resources

use clap::Parser;
use resource_images::{ImageTables, StockImageResolver};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Resource category (room, equipment, lab, facility, space, ...)
    #[arg(long)]
    category: Option<String>,

    /// Resource display name, matched against the named-image table
    #[arg(long)]
    name: Option<String>,

    /// Size variant: thumb, medium or large
    #[arg(long, default_value = "large")]
    size: String,

    /// Audit the built-in tables instead of resolving
    #[arg(long)]
    validate: bool,
}

fn main() {
    let args = Args::parse();
    let tables = ImageTables::campus_defaults();

    if args.validate {
        if let Err(e) = tables.validate() {
            eprintln!("Invalid image tables: {}", e);
            std::process::exit(1);
        }
        println!("Image tables are valid");
        return;
    }

    let resolver = StockImageResolver::new(tables);
    println!(
        "{}",
        resolver.resolve_lenient(args.category.as_deref(), args.name.as_deref(), &args.size)
    );
}
