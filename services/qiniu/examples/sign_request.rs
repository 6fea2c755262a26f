//! Sign a Qiniu management request and print the resulting header.
//!
//! Credentials are read from `QINIU_ACCESS_KEY` / `QINIU_SECRET_KEY`.

use qsign_core::{Context, Result, Signer};
use qsign_qiniu::{DefaultCredentialProvider, RequestSigner, SignVersion};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let loader = DefaultCredentialProvider::new();
    let builder = RequestSigner::new().with_version(SignVersion::V2);
    let signer = Signer::new(Context::new(), loader, builder);

    let (mut parts, _) = http::Request::get("https://rs.qbox.me/stat/ZW5jb2RlZEVudHJ5VVJJ")
        .body(())
        .unwrap()
        .into_parts();

    signer.sign(&mut parts, None).await?;

    println!(
        "Authorization: {}",
        parts
            .headers
            .get(http::header::AUTHORIZATION)
            .expect("signed request must carry an authorization header")
            .to_str()
            .unwrap()
    );

    Ok(())
}
