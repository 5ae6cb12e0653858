use std::future::Future;

use dioxus::prelude::*;

use crate::client::model::error::ApiError;

#[derive(Clone, Default)]
pub enum Cache<T> {
    #[default]
    NotFetched,
    Fetched(T),
    Error(ApiError),
}

impl<T> Cache<T> {
    pub fn is_fetched(&self) -> bool {
        !matches!(self, Cache::NotFetched)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Cache::Fetched(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            Cache::Error(err) => Some(err),
            _ => None,
        }
    }
}

/// Runs `fetch` in the browser and mirrors its latest result into a signal.
///
/// The fetch re-runs whenever a signal read inside it changes, so a counter signal can
/// be used as a refetch trigger. During server rendering nothing is fetched and the
/// cache stays `NotFetched`.
pub fn use_fetch<T, F, Fut>(fetch: F) -> Signal<Cache<T>>
where
    T: Clone + 'static,
    F: FnMut() -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    #[allow(unused_mut)]
    let mut cache = use_signal(Cache::<T>::default);

    #[cfg(feature = "web")]
    {
        let resource = use_resource(fetch);
        use_effect(move || {
            if let Some(result) = resource.read_unchecked().as_ref() {
                cache.set(match result {
                    Ok(data) => Cache::Fetched(data.clone()),
                    Err(err) => Cache::Error(err.clone()),
                });
            }
        });
    }

    #[cfg(not(feature = "web"))]
    drop(fetch);

    cache
}
