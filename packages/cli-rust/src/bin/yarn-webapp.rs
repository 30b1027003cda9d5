//! yarn-webapp binary entry point

fn main() -> anyhow::Result<()> {
    yarn_webapp::run()
}
