use std::io;

use toast_sms::{
    MessageBody, Recipient, RecipientNo, SendData, SendOptions, ToastSmsClient,
};
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
        .send_no(required_env("TOAST_SEND_NO")?)
        .build()?;
    let phone = RecipientNo::new(required_env("TOAST_PHONE")?)?;
    let message = std::env::var("TOAST_MESSAGE")
        .unwrap_or_else(|_| "Hello from the toast-sms demo.".to_owned());

    let data = client
        .send_raw_sms(
            MessageBody::new(message),
            vec![Recipient::new(phone)],
            SendOptions::default(),
        )
        .await?;

    let parsed = SendData::try_from(data)?;
    println!(
        "request_id: {:?}, status_code: {:?}",
        parsed.request_id, parsed.status_code
    );
    for result in parsed.send_results {
        println!(
            "{:?}: {:?} {:?}",
            result.recipient_no, result.result_code, result.result_message
        );
    }

    Ok(())
}
