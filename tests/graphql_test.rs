use anyhow::Result;
use async_graphql::{Request, Variables};
use blockpress::domain::{FileRef, HeaderBlock, ImageBlock, ParagraphBlock, Post};
use blockpress::graphql::{create_schema, GraphQLSchema};
use blockpress::storage::{InMemoryStorage, Storage};
use serde_json::json;
use std::sync::Arc;

const GET_POST: &str = r#"
    query getPost($id: ID!) {
        getPost(id: $id) {
            id
            title
            blocks {
                __typename
                ... on AggregatedImageBlock {
                    image {
                        publicUrl
                    }
                    order
                }
                ... on AggregatedHeaderBlock {
                    header
                    order
                }
                ... on AggregatedParagraphBlock {
                    paragraph
                    order
                }
            }
        }
    }
"#;

async fn schema_with_launch_day_post() -> Result<(GraphQLSchema, String)> {
    let storage = Arc::new(InMemoryStorage::new());

    let mut post = Post::new("Launch Day");
    storage.create_post(&mut post).await?;
    let post_id = post.id.unwrap();

    storage
        .create_image_block(&mut ImageBlock::new(
            post_id,
            FileRef {
                filename: "rocket.jpg".to_string(),
                public_url: "/images/rocket.jpg".to_string(),
            },
            2,
        ))
        .await?;
    storage
        .create_header_block(&mut HeaderBlock::new(post_id, "Welcome", 1))
        .await?;
    storage
        .create_paragraph_block(&mut ParagraphBlock::new(post_id, "We are live.", 1))
        .await?;

    Ok((create_schema(storage), post_id.to_string()))
}

async fn execute(
    schema: &GraphQLSchema,
    query: &str,
    variables: serde_json::Value,
) -> async_graphql::Response {
    schema
        .execute(Request::new(query).variables(Variables::from_json(variables)))
        .await
}

#[tokio::test]
async fn get_post_merges_blocks_across_kinds() -> Result<()> {
    let (schema, post_id) = schema_with_launch_day_post().await?;

    let response = execute(&schema, GET_POST, json!({ "id": post_id })).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let data = response.data.into_json()?;
    let post = &data["getPost"];
    assert_eq!(post["id"], json!(post_id));
    assert_eq!(post["title"], json!("Launch Day"));

    let blocks = post["blocks"].as_array().expect("blocks array");
    let typenames: Vec<&str> = blocks
        .iter()
        .map(|b| b["__typename"].as_str().unwrap())
        .collect();
    // Header and paragraph tie on order=1; the header comes first because
    // the image/header/paragraph flatten order is preserved by the stable
    // sort.
    assert_eq!(
        typenames,
        vec![
            "AggregatedHeaderBlock",
            "AggregatedParagraphBlock",
            "AggregatedImageBlock"
        ]
    );

    let orders: Vec<i64> = blocks.iter().map(|b| b["order"].as_i64().unwrap()).collect();
    assert_eq!(orders, vec![1, 1, 2]);

    assert_eq!(blocks[0]["header"], json!("Welcome"));
    assert_eq!(blocks[1]["paragraph"], json!("We are live."));
    assert_eq!(blocks[2]["image"]["publicUrl"], json!("/images/rocket.jpg"));

    Ok(())
}

#[tokio::test]
async fn get_post_without_blocks_returns_empty_list() -> Result<()> {
    let storage = Arc::new(InMemoryStorage::new());
    let mut post = Post::new("Quiet Post");
    storage.create_post(&mut post).await?;
    let post_id = post.id.unwrap().to_string();
    let schema = create_schema(storage);

    let response = execute(&schema, GET_POST, json!({ "id": post_id })).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let data = response.data.into_json()?;
    assert_eq!(data["getPost"]["title"], json!("Quiet Post"));
    assert_eq!(data["getPost"]["blocks"], json!([]));

    Ok(())
}

#[tokio::test]
async fn get_post_with_unknown_id_is_an_error() -> Result<()> {
    let (schema, _) = schema_with_launch_day_post().await?;

    let response = execute(&schema, GET_POST, json!({ "id": "missing" })).await;

    assert_eq!(response.errors.len(), 1);
    assert!(
        response.errors[0].message.contains("No post found with id missing"),
        "unexpected message: {}",
        response.errors[0].message
    );

    Ok(())
}

#[tokio::test]
async fn blocks_are_scoped_to_the_requested_post() -> Result<()> {
    let storage = Arc::new(InMemoryStorage::new());

    let mut wanted = Post::new("Wanted");
    storage.create_post(&mut wanted).await?;
    let wanted_id = wanted.id.unwrap();

    let mut other = Post::new("Other");
    storage.create_post(&mut other).await?;
    let other_id = other.id.unwrap();

    storage
        .create_header_block(&mut HeaderBlock::new(wanted_id, "Mine", 1))
        .await?;
    storage
        .create_header_block(&mut HeaderBlock::new(other_id, "Not mine", 1))
        .await?;

    let schema = create_schema(storage);
    let response = execute(&schema, GET_POST, json!({ "id": wanted_id.to_string() })).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let data = response.data.into_json()?;
    let blocks = data["getPost"]["blocks"].as_array().expect("blocks array");
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0]["header"], json!("Mine"));

    Ok(())
}

#[tokio::test]
async fn content_created_through_mutations_shows_up_in_aggregation() -> Result<()> {
    let storage = Arc::new(InMemoryStorage::new());
    let schema = create_schema(storage);

    let response = execute(
        &schema,
        r#"mutation { createPost(title: "Via Mutation") { id } }"#,
        json!({}),
    )
    .await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json()?;
    let post_id = data["createPost"]["id"].as_str().unwrap().to_string();

    let response = execute(
        &schema,
        r#"
            mutation addHeader($postId: ID!) {
                createHeaderBlock(postId: $postId, header: "First", order: 1) {
                    id
                    order
                }
            }
        "#,
        json!({ "postId": post_id }),
    )
    .await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let response = execute(&schema, GET_POST, json!({ "id": post_id })).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json()?;
    assert_eq!(data["getPost"]["title"], json!("Via Mutation"));
    let blocks = data["getPost"]["blocks"].as_array().expect("blocks array");
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0]["__typename"], json!("AggregatedHeaderBlock"));

    Ok(())
}

#[tokio::test]
async fn list_queries_expose_the_record_store() -> Result<()> {
    let (schema, post_id) = schema_with_launch_day_post().await?;

    let response = execute(
        &schema,
        r#"
            query lists($postId: ID!) {
                allHeaderBlocks(postId: $postId) {
                    header
                    post {
                        title
                    }
                }
                allPosts {
                    title
                }
            }
        "#,
        json!({ "postId": post_id }),
    )
    .await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let data = response.data.into_json()?;
    assert_eq!(data["allHeaderBlocks"][0]["header"], json!("Welcome"));
    assert_eq!(
        data["allHeaderBlocks"][0]["post"]["title"],
        json!("Launch Day")
    );
    assert_eq!(data["allPosts"], json!([{ "title": "Launch Day" }]));

    Ok(())
}
