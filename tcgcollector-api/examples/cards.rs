use tcgcollector_api::{Client, Request, TcgApiError};

#[tokio::main]
pub async fn main() -> Result<(), TcgApiError> {
    let client = Client::new("api_key");

    let req = Request::cards().list().set_id(1).page_size(20);

    let _res = client.send(req).await?;
    Ok(())
}
