use std::io;

use toast_sms::{RequestId, Reservation, ToastSmsClient, UpdateUser};
use tracing_subscriber::EnvFilter;

fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = ToastSmsClient::builder()
        .app_key(required_env("TOAST_APP_KEY")?)
        .secret_key(required_env("TOAST_SECRET_KEY")?)
        .build()?;
    let request_id = RequestId::new(required_env("TOAST_REQUEST_ID")?)?;
    let recipient_seq: u64 = std::env::var("TOAST_RECIPIENT_SEQ")
        .unwrap_or_else(|_| "1".to_owned())
        .parse()?;

    let message = client
        .cancel_reservations(
            vec![Reservation::new(request_id, recipient_seq)],
            UpdateUser::new("toast-sms-demo")?,
        )
        .await?;
    println!("result: {message}");

    Ok(())
}
