fn main() -> anyhow::Result<()> {
    minitune::app_core::Minitune::new()?.run()
}
