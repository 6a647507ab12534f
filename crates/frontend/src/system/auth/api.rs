use contracts::system::auth::{SignInRequest, SignInResponse};
use gloo_net::http::Request;

/// Third-party identity provider endpoint. The allow-list is enforced
/// before this call is made.
const SIGN_IN_URL: &str = "https://auth.high5clothing.co.uk/v1/accounts:signInWithPassword";

pub async fn sign_in(email: String, password: String) -> Result<SignInResponse, String> {
    let request = SignInRequest { email, password };

    let response = Request::post(SIGN_IN_URL)
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Sign-in rejected: {}", response.status()));
    }

    response
        .json::<SignInResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
