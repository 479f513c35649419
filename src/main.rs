use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    scorepipe::app::startup::startup().await
}
