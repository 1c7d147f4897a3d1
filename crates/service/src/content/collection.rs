use std::{marker::PhantomData, sync::Arc};

use tracing::info;

use models::Record;

use crate::errors::ServiceError;
use crate::storage::Collection;
use crate::store::ContentStore;

/// Generic CRUD over one list collection of the content document.
///
/// New records are prepended, so `list` is newest first.
pub struct CollectionService<T> {
    store: Arc<ContentStore>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for CollectionService<T> {
    fn clone(&self) -> Self {
        Self { store: Arc::clone(&self.store), _marker: PhantomData }
    }
}

impl<T: Collection> CollectionService<T> {
    pub fn new(store: Arc<ContentStore>) -> Self {
        Self { store, _marker: PhantomData }
    }

    /// 列出全部记录（新建的在前）
    pub async fn list(&self) -> Vec<Record<T>> {
        self.store.read(|doc| T::items(doc).clone()).await
    }

    /// Records sorted by their ordinal, ascending; ties and records without one
    /// keep newest-first order, the latter placed last.
    pub async fn list_ordered(&self) -> Vec<Record<T>> {
        let mut items = self.list().await;
        items.sort_by_key(|r| match r.body.ordinal() {
            Some(n) => (0, n),
            None => (1, 0),
        });
        items
    }

    /// 根据 id 获取
    pub async fn get(&self, id: &str) -> Result<Record<T>, ServiceError> {
        self.store
            .read(|doc| T::items(doc).iter().find(|r| r.id == id).cloned())
            .await
            .ok_or_else(|| ServiceError::not_found(T::NAME))
    }

    /// 创建新记录
    pub async fn create(&self, body: T) -> Result<Record<T>, ServiceError> {
        body.validate()?;
        let rec = Record::new(body);
        let created = rec.clone();
        self.store
            .update(move |doc| {
                T::items_mut(doc).insert(0, rec);
                Ok(())
            })
            .await?;
        info!(collection = T::NAME, id = %created.id, "record created");
        Ok(created)
    }

    /// 整体替换指定记录，保留 id 与 created_at
    pub async fn update(&self, id: &str, body: T) -> Result<Record<T>, ServiceError> {
        body.validate()?;
        let updated = self
            .store
            .update(|doc| {
                let existing = T::items_mut(doc)
                    .iter_mut()
                    .find(|r| r.id == id)
                    .ok_or_else(|| ServiceError::not_found(T::NAME))?;
                existing.replace(body);
                Ok(existing.clone())
            })
            .await?;
        info!(collection = T::NAME, id = %updated.id, "record updated");
        Ok(updated)
    }

    /// 删除指定记录；不存在时返回 NotFound
    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        self.store
            .update(|doc| {
                let items = T::items_mut(doc);
                let before = items.len();
                items.retain(|r| r.id != id);
                if items.len() == before {
                    return Err(ServiceError::not_found(T::NAME));
                }
                Ok(())
            })
            .await?;
        info!(collection = T::NAME, %id, "record deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::{metric::Metric, post::Post, process::ProcessStep, service::Service};
    use crate::test_support::empty_store;

    fn post(title: &str) -> Post {
        Post { title: title.into(), category: "News".into(), ..Default::default() }
    }

    #[tokio::test]
    async fn create_prepends_and_persists() -> Result<(), anyhow::Error> {
        let (store, backend) = empty_store().await?;
        let posts = CollectionService::<Post>::new(store);

        let first = posts.create(post("first")).await?;
        let second = posts.create(post("second")).await?;
        assert_ne!(first.id, second.id);

        let list = posts.list().await;
        assert_eq!(list.iter().map(|r| r.body.title.as_str()).collect::<Vec<_>>(), ["second", "first"]);

        let persisted = backend.snapshot().await.expect("saved");
        assert_eq!(persisted.posts.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn create_rejects_invalid_body_without_writing() -> Result<(), anyhow::Error> {
        let (store, backend) = empty_store().await?;
        let services = CollectionService::<Service>::new(store);
        let err = services.create(Service::default()).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert_eq!(backend.save_count(), 0);
        assert!(services.list().await.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn update_replaces_whole_body_keeping_identity() -> Result<(), anyhow::Error> {
        let (store, _) = empty_store().await?;
        let posts = CollectionService::<Post>::new(store);
        let created = posts
            .create(Post { title: "v1".into(), excerpt: "old excerpt".into(), ..Default::default() })
            .await?;

        let updated = posts.update(&created.id, Post { title: "v2".into(), ..Default::default() }).await?;
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at.is_some());
        // 整体替换：未提交的字段被清空
        assert_eq!(updated.body.excerpt, "");
        assert_eq!(posts.get(&created.id).await?.body.title, "v2");
        Ok(())
    }

    #[tokio::test]
    async fn update_and_delete_unknown_id_are_not_found() -> Result<(), anyhow::Error> {
        let (store, backend) = empty_store().await?;
        let metrics = CollectionService::<Metric>::new(store);
        let m = Metric { label: "Clients".into(), target: 500, suffix: "+".into() };
        assert!(matches!(metrics.update("missing", m).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(metrics.delete("missing").await, Err(ServiceError::NotFound(_))));
        assert!(matches!(metrics.get("missing").await, Err(ServiceError::NotFound(_))));
        assert_eq!(backend.save_count(), 0);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_creates_are_all_kept() -> Result<(), anyhow::Error> {
        const N: usize = 32;
        let (store, backend) = empty_store().await?;
        let posts = CollectionService::<Post>::new(store);

        let tasks: Vec<_> = (0..N)
            .map(|i| {
                let posts = posts.clone();
                tokio::spawn(async move { posts.create(post(&format!("post-{i}"))).await })
            })
            .collect();
        for task in tasks {
            task.await??;
        }

        // 写锁串行化所有写入，不丢更新
        assert_eq!(posts.list().await.len(), N);
        assert_eq!(backend.snapshot().await.map(|d| d.posts.len()), Some(N));
        assert_eq!(backend.save_count(), N);
        Ok(())
    }

    #[tokio::test]
    async fn process_steps_order_by_step() -> Result<(), anyhow::Error> {
        let (store, _) = empty_store().await?;
        let steps = CollectionService::<ProcessStep>::new(store.clone());
        for (n, title) in [(3, "Execution"), (1, "Audit"), (4, "Optimization"), (2, "Strategy")] {
            steps.create(ProcessStep { step: n, title: title.into(), ..Default::default() }).await?;
        }
        let ordered = steps.list_ordered().await;
        assert_eq!(ordered.iter().map(|r| r.body.step).collect::<Vec<_>>(), [1, 2, 3, 4]);

        // 没有序号的集合保持新建在前
        let posts = CollectionService::<Post>::new(store);
        posts.create(post("a")).await?;
        posts.create(post("b")).await?;
        assert_eq!(posts.list_ordered().await[0].body.title, "b");
        Ok(())
    }

    #[tokio::test]
    async fn delete_removes_only_target() -> Result<(), anyhow::Error> {
        let (store, _) = empty_store().await?;
        let steps = CollectionService::<ProcessStep>::new(store.clone());
        let a = steps.create(ProcessStep { step: 1, title: "Audit".into(), ..Default::default() }).await?;
        let b = steps.create(ProcessStep { step: 2, title: "Strategy".into(), ..Default::default() }).await?;
        steps.delete(&a.id).await?;
        let left = steps.list().await;
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].id, b.id);

        // 其他集合不受影响
        assert!(CollectionService::<Post>::new(store).list().await.is_empty());
        Ok(())
    }
}
