use std::sync::Arc;

use uuid::Uuid;

use memos::application::usecases::{
    create_memo::{CreateMemoRequest, CreateMemoUseCase},
    delete_memo::{DeleteMemoRequest, DeleteMemoUseCase},
    get_memo::GetMemoUseCase,
    list_memos::ListMemosUseCase,
    update_memo::{UpdateMemoRequest, UpdateMemoUseCase},
};
use memos::domain::{errors::DomainError, models::Memo, repositories::MemoRepository};
use memos::infrastructure::repositories::in_memory::InMemoryMemoRepository;

struct Fixture {
    create: CreateMemoUseCase,
    get: GetMemoUseCase,
    list: ListMemosUseCase,
    update: UpdateMemoUseCase,
    delete: DeleteMemoUseCase,
}

fn fixture() -> Fixture {
    let repo: Arc<dyn MemoRepository> = Arc::new(InMemoryMemoRepository::new());
    Fixture {
        create: CreateMemoUseCase::new(repo.clone()),
        get: GetMemoUseCase::new(repo.clone()),
        list: ListMemosUseCase::new(repo.clone()),
        update: UpdateMemoUseCase::new(repo.clone()),
        delete: DeleteMemoUseCase::new(repo),
    }
}

async fn create(fx: &Fixture, owner_id: Uuid, title: &str, content: &str) -> Memo {
    fx.create
        .execute(CreateMemoRequest {
            owner_id,
            title: title.to_string(),
            content: content.to_string(),
        })
        .await
        .unwrap()
}

#[tokio::test]
async fn created_memo_belongs_to_its_creator() {
    let fx = fixture();
    let owner = Uuid::new_v4();

    let memo = create(&fx, owner, "T", "C").await;
    assert_eq!(memo.owner_id, owner);

    let fetched = fx.get.execute(memo.id).await.unwrap();
    assert_eq!(fetched.owner_id, owner);
    assert_eq!(fetched.title, "T");
    assert_eq!(fetched.content, "C");
}

#[tokio::test]
async fn create_rejects_empty_fields() {
    let fx = fixture();
    let owner = Uuid::new_v4();

    let err = fx
        .create
        .execute(CreateMemoRequest {
            owner_id: owner,
            title: "  ".to_string(),
            content: "C".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::InvalidArgument(_)));

    let err = fx
        .create
        .execute(CreateMemoRequest {
            owner_id: owner,
            title: "T".to_string(),
            content: "".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::InvalidArgument(_)));
}

#[tokio::test]
async fn list_returns_all_memos_in_insertion_order() {
    let fx = fixture();
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();

    let first = create(&fx, alice, "first", "a").await;
    let second = create(&fx, bob, "second", "b").await;
    let third = create(&fx, alice, "third", "c").await;

    let memos = fx.list.execute().await.unwrap();
    let ids: Vec<Uuid> = memos.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![first.id, second.id, third.id]);
}

#[tokio::test]
async fn any_authenticated_user_can_read_any_memo() {
    let fx = fixture();
    let memo = create(&fx, Uuid::new_v4(), "T", "C").await;

    // detail imposes no ownership restriction
    let fetched = fx.get.execute(memo.id).await.unwrap();
    assert_eq!(fetched.id, memo.id);
}

#[tokio::test]
async fn get_missing_memo_is_not_found() {
    let fx = fixture();
    let err = fx.get.execute(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
}

#[tokio::test]
async fn owner_can_update_title_and_content() {
    let fx = fixture();
    let owner = Uuid::new_v4();
    let memo = create(&fx, owner, "T", "C").await;

    let updated = fx
        .update
        .execute(UpdateMemoRequest {
            memo_id: memo.id,
            requester_id: owner,
            title: "T2".to_string(),
            content: "C2".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(updated.title, "T2");
    assert_eq!(updated.content, "C2");
    assert_eq!(updated.owner_id, owner);
    assert_eq!(updated.created_at, memo.created_at);
}

#[tokio::test]
async fn update_by_non_owner_is_forbidden() {
    let fx = fixture();
    let owner = Uuid::new_v4();
    let memo = create(&fx, owner, "T", "C").await;

    let err = fx
        .update
        .execute(UpdateMemoRequest {
            memo_id: memo.id,
            requester_id: Uuid::new_v4(),
            title: "hijacked".to_string(),
            content: "hijacked".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Forbidden(_)));

    // memo is untouched
    let fetched = fx.get.execute(memo.id).await.unwrap();
    assert_eq!(fetched.title, "T");
    assert_eq!(fetched.content, "C");
}

#[tokio::test]
async fn update_missing_memo_is_not_found() {
    let fx = fixture();
    let err = fx
        .update
        .execute(UpdateMemoRequest {
            memo_id: Uuid::new_v4(),
            requester_id: Uuid::new_v4(),
            title: "T".to_string(),
            content: "C".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
}

#[tokio::test]
async fn owner_can_delete_memo() {
    let fx = fixture();
    let owner = Uuid::new_v4();
    let memo = create(&fx, owner, "T", "C").await;

    fx.delete
        .execute(DeleteMemoRequest {
            memo_id: memo.id,
            requester_id: owner,
        })
        .await
        .unwrap();

    let err = fx.get.execute(memo.id).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
}

#[tokio::test]
async fn delete_by_non_owner_is_forbidden() {
    let fx = fixture();
    let memo = create(&fx, Uuid::new_v4(), "T", "C").await;

    let err = fx
        .delete
        .execute(DeleteMemoRequest {
            memo_id: memo.id,
            requester_id: Uuid::new_v4(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Forbidden(_)));

    assert!(fx.get.execute(memo.id).await.is_ok());
}

#[tokio::test]
async fn delete_missing_memo_is_not_found() {
    let fx = fixture();
    let err = fx
        .delete
        .execute(DeleteMemoRequest {
            memo_id: Uuid::new_v4(),
            requester_id: Uuid::new_v4(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
}
