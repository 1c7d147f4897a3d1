use serde::{de::DeserializeOwned, Deserialize, Serialize};

use models::{
    admin::AdminCredential, contact::ContactMessage, hero::Hero, metric::Metric, post::Post,
    process::ProcessStep, service::Service, Record, Validate,
};

/// Everything the site stores, persisted as a single JSON object.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ContentDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin: Option<AdminCredential>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero: Option<Hero>,
    pub posts: Vec<Record<Post>>,
    pub services: Vec<Record<Service>>,
    pub metrics: Vec<Record<Metric>>,
    pub process: Vec<Record<ProcessStep>>,
    pub contacts: Vec<Record<ContactMessage>>,
}

impl ContentDocument {
    /// Initial content for a brand-new data file.
    pub fn seed(admin: AdminCredential) -> Self {
        let post = Post {
            title: "🚀 Scaling Neural Infrastructure".into(),
            category: "AI & Data".into(),
            excerpt: "Exploring the deployment of industrial-grade neural networks across distributed corporate networks.".into(),
            content: "Full strategic content for neural networks...".into(),
            image_url: "https://images.unsplash.com/photo-1677442136019-21780ecad995?auto=format&fit=crop&q=80&w=800".into(),
        };
        Self {
            admin: Some(admin),
            posts: vec![Record::new(post)],
            ..Default::default()
        }
    }

    /// Wrap a legacy posts-only array into a full document.
    pub fn from_legacy_posts(posts: Vec<Record<Post>>) -> Self {
        Self { posts, ..Default::default() }
    }
}

/// A list collection inside the document, addressable by its API name.
pub trait Collection:
    Clone + Serialize + DeserializeOwned + Validate + Send + Sync + 'static
{
    /// Name used in the JSON document and in `/api/{name}` routes.
    const NAME: &'static str;

    fn items(doc: &ContentDocument) -> &Vec<Record<Self>>;
    fn items_mut(doc: &mut ContentDocument) -> &mut Vec<Record<Self>>;

    /// Explicit position for collections that carry one (process steps).
    fn ordinal(&self) -> Option<i64> { None }
}

macro_rules! collection {
    ($ty:ty, $name:literal, $field:ident $(, ordinal = |$it:ident| $ord:expr)?) => {
        impl Collection for $ty {
            const NAME: &'static str = $name;
            fn items(doc: &ContentDocument) -> &Vec<Record<Self>> { &doc.$field }
            fn items_mut(doc: &mut ContentDocument) -> &mut Vec<Record<Self>> { &mut doc.$field }
            $(fn ordinal(&self) -> Option<i64> { let $it = self; Some($ord) })?
        }
    };
}

collection!(Post, "posts", posts);
collection!(Service, "services", services);
collection!(Metric, "metrics", metrics);
collection!(ProcessStep, "process", process, ordinal = |p| p.step);
collection!(ContactMessage, "contacts", contacts);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_admin_and_sample_post() {
        let doc = ContentDocument::seed(AdminCredential::new("admin", "1234"));
        assert_eq!(doc.admin.as_ref().map(|a| a.username.as_str()), Some("admin"));
        assert_eq!(doc.posts.len(), 1);
        assert!(doc.services.is_empty() && doc.metrics.is_empty() && doc.process.is_empty());
        assert!(doc.hero.is_none());
    }

    #[test]
    fn missing_collections_default_empty() {
        let doc: ContentDocument = serde_json::from_str(r#"{"posts":[{"id":"1","title":"x"}]}"#).unwrap();
        assert_eq!(doc.posts.len(), 1);
        assert!(doc.admin.is_none());
        assert!(doc.contacts.is_empty());
    }

    #[test]
    fn collection_names_match_document_keys() {
        let v = serde_json::to_value(ContentDocument::default()).unwrap();
        for name in [Post::NAME, Service::NAME, Metric::NAME, ProcessStep::NAME, ContactMessage::NAME] {
            assert!(v.get(name).is_some(), "missing key {name}");
        }
    }
}
