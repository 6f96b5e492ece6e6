use inkpost_core::{
    Account, BlogService, NewAccount, NewComment, NewPost, Post, UuidProvider,
};

#[test]
fn deleting_an_account_removes_its_posts_and_their_comments() {
    let mut service = service();
    let ann = account(&mut service, "Ann", "a@x.com");
    let post = published_post(&mut service, &ann, "T");
    comment(&mut service, &ann, &post);

    service.delete_account(ann.id).expect("delete should succeed");

    assert!(service.list_accounts(None).is_empty());
    assert!(service.list_posts(None).is_empty());
    assert!(service.list_comments().is_empty());
}

#[test]
fn comments_by_others_on_a_removed_post_are_swept_too() {
    let mut service = service();
    let ann = account(&mut service, "Ann", "a@x.com");
    let bob = account(&mut service, "Bob", "b@x.com");
    let anns_post = published_post(&mut service, &ann, "Ann's post");
    comment(&mut service, &bob, &anns_post);

    service.delete_account(ann.id).expect("delete should succeed");

    // Bob survives untouched, but his comment's post is gone.
    assert_eq!(service.list_accounts(None), vec![bob]);
    assert!(service.list_comments().is_empty());
}

#[test]
fn authored_comments_on_surviving_posts_are_removed() {
    let mut service = service();
    let ann = account(&mut service, "Ann", "a@x.com");
    let bob = account(&mut service, "Bob", "b@x.com");
    let bobs_post = published_post(&mut service, &bob, "Bob's post");
    comment(&mut service, &ann, &bobs_post);
    let bobs_comment = comment(&mut service, &bob, &bobs_post);

    service.delete_account(ann.id).expect("delete should succeed");

    assert_eq!(service.list_posts(None), vec![bobs_post]);
    assert_eq!(service.list_comments(), vec![bobs_comment]);
}

#[test]
fn cascade_removes_exactly_the_dependents() {
    let mut service = service();
    let ann = account(&mut service, "Ann", "a@x.com");
    let bob = account(&mut service, "Bob", "b@x.com");
    let anns_post = published_post(&mut service, &ann, "Ann's post");
    let bobs_post = published_post(&mut service, &bob, "Bob's post");
    comment(&mut service, &ann, &anns_post);
    comment(&mut service, &bob, &anns_post);
    comment(&mut service, &ann, &bobs_post);
    let unrelated = comment(&mut service, &bob, &bobs_post);

    service.delete_account(ann.id).expect("delete should succeed");

    assert_eq!(service.list_posts(None), vec![bobs_post]);
    assert_eq!(service.list_comments(), vec![unrelated]);
    assert_referential_closure(&service);
}

#[test]
fn deleting_a_post_removes_only_its_comments() {
    let mut service = service();
    let ann = account(&mut service, "Ann", "a@x.com");
    let first = published_post(&mut service, &ann, "first");
    let second = published_post(&mut service, &ann, "second");
    comment(&mut service, &ann, &first);
    let survivor = comment(&mut service, &ann, &second);

    service.delete_post(first.id).expect("delete should succeed");

    assert_eq!(service.list_posts(None), vec![second]);
    assert_eq!(service.list_comments(), vec![survivor]);
    assert_referential_closure(&service);
}

/// Every live post's author and every live comment's author/post must
/// resolve to live entities after any operation.
fn assert_referential_closure(service: &BlogService<UuidProvider>) {
    let store = service.store();
    for post in store.posts() {
        assert!(
            store.account(post.author).is_some(),
            "post {} has a dangling author",
            post.id
        );
    }
    for comment in store.comments() {
        assert!(
            store.account(comment.author).is_some(),
            "comment {} has a dangling author",
            comment.id
        );
        assert!(
            store.post(comment.post).is_some(),
            "comment {} has a dangling post",
            comment.id
        );
    }
}

fn service() -> BlogService<UuidProvider> {
    BlogService::new(UuidProvider)
}

fn account(service: &mut BlogService<UuidProvider>, name: &str, email: &str) -> Account {
    service
        .create_account(NewAccount {
            name: name.to_string(),
            email: email.to_string(),
            age: None,
        })
        .expect("account creation should succeed")
}

fn published_post(service: &mut BlogService<UuidProvider>, author: &Account, title: &str) -> Post {
    service
        .create_post(NewPost {
            title: title.to_string(),
            body: "body".to_string(),
            published: true,
            author: author.id,
        })
        .expect("post creation should succeed")
}

fn comment(
    service: &mut BlogService<UuidProvider>,
    author: &Account,
    post: &Post,
) -> inkpost_core::Comment {
    service
        .create_comment(NewComment {
            body: "comment".to_string(),
            author: author.id,
            post: post.id,
        })
        .expect("comment creation should succeed")
}
