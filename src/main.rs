use miette::Result;

/// Main entry point for the genopheno CLI tool
fn main() -> Result<()> {
    miette::set_panic_hook();

    genopheno::run()
}
