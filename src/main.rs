mod config;
mod display;
mod error;
mod system;
mod watch;


use std::process;

fn main() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    rt.block_on(async_main());
}

async fn async_main() {
    // All validation happens here, before any terminal mode change, so
    // startup errors never leave the screen in the alternate buffer
    let config = match config::Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(e.exit_code());
        }
    };

    match watch::run(config).await {
        Ok(status) => process::exit(status),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(e.exit_code());
        }
    }
}
