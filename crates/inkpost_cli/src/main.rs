//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `inkpost_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use inkpost_core::{BlogService, NewAccount, NewComment, NewPost, UuidProvider};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    println!("inkpost_core ping={}", inkpost_core::ping());
    println!("inkpost_core version={}", inkpost_core::core_version());

    let mut service = BlogService::new(UuidProvider);
    let author = service.create_account(NewAccount {
        name: "Peter".to_string(),
        email: "peter@example.com".to_string(),
        age: Some(27),
    })?;
    let post = service.create_post(NewPost {
        title: "How I Met My Pudding".to_string(),
        body: "Puddings are a mysterious type".to_string(),
        published: true,
        author: author.id,
    })?;
    service.create_comment(NewComment {
        body: "Big if true".to_string(),
        author: author.id,
        post: post.id,
    })?;

    println!(
        "seeded accounts={} posts={} comments={}",
        service.list_accounts(None).len(),
        service.list_posts(None).len(),
        service.list_comments().len()
    );
    Ok(())
}
