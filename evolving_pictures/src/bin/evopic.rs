fn main() -> anyhow::Result<()> {
    evolving_pictures::cli::run()
}
