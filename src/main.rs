fn main() -> anyhow::Result<()> {
    content_detector_lib::run()
}
