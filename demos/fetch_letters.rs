// Minimal example: list friends and dump every letter exchanged with them.
//
// Usage: SLOWLY_TOKEN=... cargo run --example fetch_letters
use slowly::Client;

#[tokio::main]
async fn main() -> slowly::Result<()> {
    let token = std::env::var("SLOWLY_TOKEN").expect("SLOWLY_TOKEN must be set");

    let client = Client::new()?;
    client.login(token);

    let me = client.fetch_profile().await?;
    println!("Logged in as {}", me);

    for friend in client.fetch_friends().await? {
        println!("== {} ({} unread)", friend, friend.unread.unwrap_or(0));

        let mut letters = client.letters(friend.id);
        while let Some(letter) = letters.next().await? {
            println!("  {}", letter);
        }
    }

    Ok(())
}
