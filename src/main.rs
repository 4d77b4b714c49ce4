use miette::Result;

/// Main entry point for the eulerian-check CLI tool
fn main() -> Result<()> {
    // Install miette's panic and error handler
    miette::set_panic_hook();

    eulerian_check::run()
}
