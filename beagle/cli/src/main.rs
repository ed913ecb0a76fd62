use anyhow::Result;

fn main() -> Result<()> {
    beagle_cli::cli_main(std::env::args().collect())
}
