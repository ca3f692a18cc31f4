mod resource;
mod storage;

pub use resource::{ITextClassifier, ITextEmbedder, IVersionedResource};
pub use storage::{
    IBanditStore, IClassificationStore, IPurchaseIntentStore, ITextEmbeddingEventStore,
};
