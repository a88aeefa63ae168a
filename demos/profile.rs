//! Load the pieces of a user profile page concurrently.
//!
//! Each operation carries its own deadline: the runner itself never cancels
//! anything, so the slow recommendations service is bounded with a timeout
//! inside its operation.

use async_std::task;
use futures_time::prelude::*;
use futures_time::time::Duration;
use keyed_futures::prelude::*;
use keyed_futures::Outcome;

use std::error::Error;
use std::fmt::Debug;
use std::io;

type BoxError = Box<dyn Error + Send + Sync + 'static>;

#[derive(Debug)]
struct User {
    id: u32,
    name: String,
}

async fn fetch_user(id: u32) -> Result<User, BoxError> {
    task::sleep(std::time::Duration::from_millis(20)).await;
    Ok(User {
        id,
        name: format!("user_{id}"),
    })
}

async fn fetch_orders(id: u32) -> Result<Vec<u32>, BoxError> {
    task::sleep(std::time::Duration::from_millis(40)).await;
    Ok(vec![id * 100, id * 100 + 1])
}

async fn fetch_recommendations() -> Result<Vec<String>, BoxError> {
    let slow = async {
        task::sleep(std::time::Duration::from_secs(5)).await;
        Ok::<_, io::Error>(vec!["never".to_string()])
    };
    Ok(slow.timeout(Duration::from_millis(100)).await??)
}

#[async_std::main]
async fn main() -> Result<(), BoxError> {
    // Every part is required: fail the whole page if one is missing.
    let page = keyed_futures::all! {
        user: || fetch_user(7),
        orders: || fetch_orders(7),
    }
    .await?;
    println!("{} (#{}) has orders {:?}", page.user.name, page.user.id, page.orders);

    // Optional widgets: render what arrived, report what didn't.
    let (orders, recommendations) = (
        ("orders", || fetch_orders(7)),
        ("recommendations", fetch_recommendations),
    )
        .all_settled()
        .await;
    report(orders);
    report(recommendations);
    Ok(())
}

fn report<T: Debug>((key, outcome): (&str, Outcome<T, BoxError>)) {
    match outcome {
        Outcome::Fulfilled(value) => println!("{key}: {value:?}"),
        Outcome::Rejected(reason) => println!("{key}: unavailable ({reason})"),
    }
}
