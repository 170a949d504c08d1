use anyhow::Result;
use assessment_submit::{logger, App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置，第一个参数可覆盖表单文件
    let config = Config::from_env()?.with_form_file(std::env::args().nth(1));

    // 初始化日志
    logger::init_with_verbose(config.verbose_logging);

    // 初始化并运行应用
    App::initialize(config).run().await?;

    Ok(())
}
