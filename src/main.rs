use std::error::Error;
use subnet_visualizer::cli::{parse_args, run};
use subnet_visualizer::config::Config;

fn init_logging() {
    // Fall back to warnings on stderr when there is no log4rs.yml next to the binary.
    if log4rs::init_file("log4rs.yml", Default::default()).is_err() {
        let stderr = log4rs::append::console::ConsoleAppender::builder()
            .target(log4rs::append::console::Target::Stderr)
            .build();
        let config = log4rs::config::Config::builder()
            .appender(log4rs::config::Appender::builder().build("stderr", Box::new(stderr)))
            .build(
                log4rs::config::Root::builder()
                    .appender("stderr")
                    .build(log::LevelFilter::Warn),
            )
            .expect("Error building default log4rs config");
        log4rs::init_config(config).expect("Error initializing log4rs");
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    init_logging();
    log::info!("#Start main()");

    let config = Config::from_env()?;
    colored::control::set_override(config.color);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let request = parse_args(&args, &config)?;
    let rejected = run(request, &config)?;

    if rejected > 0 {
        log::warn!("{rejected} input(s) rejected");
        std::process::exit(1);
    }
    Ok(())
}
