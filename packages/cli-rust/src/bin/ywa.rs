//! ywa - short alias for yarn-webapp

fn main() -> anyhow::Result<()> {
    yarn_webapp::run()
}
