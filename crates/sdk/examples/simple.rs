//! Simple SDK Example
//!
//! Creates a queue, enrolls a few people, pauses the queue and reads it back.
//!
//! # Usage
//!
//! 1. Start the daemon:
//!    ```bash
//!    cargo run --package simplq-daemon
//!    ```
//!
//! 2. Run this example:
//!    ```bash
//!    cargo run --package simplq-sdk --example simple
//!    ```

use simplq_sdk::{EnrollRequest, SimplqClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("SimplQ SDK - Simple Example");
    println!("===========================\n");

    // 1. Connect to daemon
    println!("1. Connecting to daemon...");
    let client = SimplqClient::connect("http://127.0.0.1:9640").await?;
    println!("   ✓ Connected\n");

    // 2. Create a queue
    println!("2. Creating a queue...");
    let queue = client.create_queue("Bakery counter").await?;
    println!("   ✓ Queue created: {}\n", queue.queue_id);

    // 3. Enroll a few people
    println!("3. Enrolling...");
    for (name, contact) in [("Ada", "+44 20 7946 0000"), ("Grace", "555-0100")] {
        let token = client
            .enroll(EnrollRequest::new(&queue.queue_id, name).contact_number(contact))
            .await?;
        println!("   ✓ {} holds token #{}", name, token.token_number);
    }
    println!();

    // 4. Pause the queue
    println!("4. Pausing queue...");
    client.set_paused(&queue.queue_id, true).await?;
    println!("   ✓ Paused\n");

    // 5. Read it back
    println!("5. Reading queue...");
    let view = client.get_queue(&queue.queue_id).await?;
    println!("   ✓ {} [{}]", view.name, view.state);
    for token in &view.tokens {
        println!("     #{:<4} {}", token.token_number, token.name);
    }

    println!("\n✓ Example completed successfully!");

    Ok(())
}
