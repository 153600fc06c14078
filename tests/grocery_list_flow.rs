use sea_orm::MockExecResult;

use pantry_vision::{
    GroceryList,
    error::AppError,
    test_helpers::{grocery_list_model, mock_services, user_model},
};

#[tokio::test]
async fn created_list_reports_owner_and_contents() {
    let services = mock_services(|db| {
        db.append_query_results([[grocery_list_model(
            1,
            7,
            Some("Weekly"),
            Some("eggs,milk"),
        )]])
        .append_query_results([[grocery_list_model(
            1,
            7,
            Some("Weekly"),
            Some("eggs,milk"),
        )]])
        .append_query_results([[user_model(7, "owner@example.com")]])
    });
    let lists = services.grocery_list();

    let created = lists
        .create_list(7, &GroceryList::new("Weekly", "eggs,milk"))
        .await
        .expect("list should be created");
    assert_eq!(created.owner_id, 7);

    let record = GroceryList::from(created);
    assert_eq!(record.id, 1);
    assert_eq!(record.title(), Some("Weekly"));
    assert_eq!(record.ingredients(), Some("eggs,milk"));

    let owner = lists.owner_of(record.id).await.expect("owner should load");
    assert_eq!(owner.id, 7);
}

#[tokio::test]
async fn default_record_persists_without_title_or_ingredients() {
    let services = mock_services(|db| {
        db.append_query_results([[grocery_list_model(2, 3, None, None)]])
    });

    let created = services
        .grocery_list()
        .create_list(3, &GroceryList::default())
        .await
        .expect("empty list should be created");
    assert_eq!(created.title, None);
    assert_eq!(created.ingredients, None);
    assert_eq!(created.owner_id, 3);
}

#[tokio::test]
async fn rename_then_replace_ingredients() {
    let services = mock_services(|db| {
        db.append_query_results([
            [grocery_list_model(4, 1, Some("Draft"), Some("flour"))],
            [grocery_list_model(4, 1, Some("Baking"), Some("flour"))],
            [grocery_list_model(4, 1, Some("Baking"), Some("flour"))],
            [grocery_list_model(4, 1, Some("Baking"), Some("flour,sugar"))],
        ])
    });
    let lists = services.grocery_list();

    let renamed = lists
        .rename(4, Some("Baking".to_string()))
        .await
        .expect("rename should succeed");
    assert_eq!(renamed.title.as_deref(), Some("Baking"));

    let updated = lists
        .replace_ingredients(4, Some("flour,sugar".to_string()))
        .await
        .expect("ingredients should update");
    assert_eq!(updated.ingredients.as_deref(), Some("flour,sugar"));
    assert_eq!(updated.title.as_deref(), Some("Baking"));
}

#[tokio::test]
async fn missing_list_is_not_found() {
    let services = mock_services(|db| {
        db.append_query_results([Vec::<pantry_vision::db::entities::grocery_list::Model>::new()])
    });

    let err = services
        .grocery_list()
        .require_list(404)
        .await
        .expect_err("list should be missing");
    assert!(matches!(err, AppError::NotFound(ref message) if message == "Grocery list not found"));
}

#[tokio::test]
async fn delete_reports_missing_rows() {
    let services = mock_services(|db| {
        db.append_exec_results([
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            },
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            },
        ])
    });
    let lists = services.grocery_list();

    lists.delete_list(9).await.expect("first delete should succeed");
    let err = lists
        .delete_list(9)
        .await
        .expect_err("second delete should fail");
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn search_rejects_invalid_pages() {
    let services = mock_services(|db| db);

    let err = services
        .grocery_list()
        .search(1, "week", 0, 10)
        .await
        .expect_err("page 0 should be rejected");
    assert!(matches!(err, AppError::BadRequest(_)));
}

#[tokio::test]
async fn lists_for_owner_returns_rows_in_order() {
    let services = mock_services(|db| {
        db.append_query_results([[
            grocery_list_model(1, 5, Some("Mon"), None),
            grocery_list_model(2, 5, Some("Tue"), None),
        ]])
    });

    let lists = services
        .grocery_list()
        .lists_for_owner(5)
        .await
        .expect("query should succeed");
    let titles: Vec<_> = lists.iter().filter_map(|list| list.title.as_deref()).collect();
    assert_eq!(titles, ["Mon", "Tue"]);
}
