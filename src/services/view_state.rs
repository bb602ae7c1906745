use std::sync::Arc;
use tokio::sync::RwLock;

/// A value bound to the view.
///
/// Clones share the same slot: controller operations write to it when a
/// response arrives and the view reads whatever was written last. The lock
/// is only held for the copy in or out, never across a request.
#[derive(Debug, Default)]
pub struct ViewState<T> {
    inner: Arc<RwLock<T>>,
}

impl<T> Clone for ViewState<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> ViewState<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
        }
    }

    pub async fn set(&self, value: T) {
        *self.inner.write().await = value;
    }
}

impl<T: Clone> ViewState<T> {
    pub async fn get(&self) -> T {
        self.inner.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn clones_share_the_slot() {
        let state = ViewState::new(vec![1, 2]);
        let view = state.clone();

        state.set(vec![3]).await;
        assert_eq!(view.get().await, vec![3]);
    }

    #[tokio::test]
    async fn default_is_empty() {
        let state: ViewState<Vec<String>> = ViewState::default();
        assert!(state.get().await.is_empty());
    }
}
