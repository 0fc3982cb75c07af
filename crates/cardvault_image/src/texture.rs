//! Cancellable texture slots
//!
//! A [`TextureSlot`] always has something to show. It starts on its
//! placeholder, and the frame loop calls [`TextureSlot::poll`] to pick up a
//! finished load. Loads run on a tokio runtime, off the frame loop. Dropping
//! the slot cancels its load so a late result never reaches an unmounted
//! entity.

use crate::error::Result;
use crate::loader::ImageData;
use crate::placeholder::Placeholder;
use crate::source::{AssetSource, ImageSource};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// Shared cancellation flag tied to a slot's lifetime
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Load state of a slot
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextureStatus {
    /// No load was issued; the placeholder is permanent
    Placeholder,
    /// Load in flight, placeholder showing
    Loading,
    /// Real image showing
    Loaded,
    /// Load failed; placeholder kept, never retried
    Failed,
}

/// A texture that swaps from placeholder to real image once
pub struct TextureSlot {
    image: Arc<ImageData>,
    label: Option<String>,
    status: TextureStatus,
    pending: Option<oneshot::Receiver<Result<ImageData>>>,
    token: CancelToken,
    task: Option<JoinHandle<()>>,
}

impl TextureSlot {
    /// A slot that only ever shows its placeholder
    pub fn placeholder(placeholder: Placeholder) -> Self {
        Self {
            image: placeholder.image,
            label: Some(placeholder.label),
            status: TextureStatus::Placeholder,
            pending: None,
            token: CancelToken::new(),
            task: None,
        }
    }

    /// Image to render this frame
    pub fn image(&self) -> &Arc<ImageData> {
        &self.image
    }

    /// Overlay label while the placeholder is showing
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn status(&self) -> TextureStatus {
        self.status
    }

    /// Token cancelled when this slot is dropped
    pub fn cancel_token(&self) -> CancelToken {
        self.token.clone()
    }

    /// Pick up a completed load, returning `true` if the image changed
    pub fn poll(&mut self) -> bool {
        let Some(rx) = self.pending.as_mut() else {
            return false;
        };
        match rx.try_recv() {
            Ok(Ok(image)) => {
                tracing::debug!(
                    width = image.width(),
                    height = image.height(),
                    "texture loaded"
                );
                self.image = Arc::new(image);
                self.label = None;
                self.status = TextureStatus::Loaded;
                self.pending = None;
                true
            }
            Ok(Err(err)) => {
                tracing::debug!(error = %err, "texture load failed, keeping placeholder");
                self.status = TextureStatus::Failed;
                self.pending = None;
                false
            }
            Err(oneshot::error::TryRecvError::Empty) => false,
            Err(oneshot::error::TryRecvError::Closed) => {
                tracing::debug!("texture load abandoned, keeping placeholder");
                self.status = TextureStatus::Failed;
                self.pending = None;
                false
            }
        }
    }
}

impl Drop for TextureSlot {
    fn drop(&mut self) {
        self.token.cancel();
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl std::fmt::Debug for TextureSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextureSlot")
            .field("status", &self.status)
            .field("label", &self.label)
            .finish()
    }
}

/// Issues texture loads on a tokio runtime
#[derive(Clone)]
pub struct TextureLoader {
    source: Arc<dyn AssetSource>,
    runtime: Handle,
}

impl TextureLoader {
    pub fn new(source: Arc<dyn AssetSource>, runtime: Handle) -> Self {
        Self { source, runtime }
    }

    /// Loader on the runtime of the calling context
    ///
    /// Panics outside a tokio runtime, like [`Handle::current`].
    pub fn current(source: Arc<dyn AssetSource>) -> Self {
        Self::new(source, Handle::current())
    }

    /// Start loading `reference`, showing `placeholder` until it resolves
    pub fn load(&self, reference: &str, placeholder: Placeholder) -> TextureSlot {
        let mut slot = TextureSlot::placeholder(placeholder);
        let (tx, rx) = oneshot::channel();
        let token = slot.cancel_token();
        let source = self.source.clone();
        let image_source = ImageSource::parse(reference);

        tracing::trace!(?image_source, "texture load issued");
        let task = self.runtime.spawn(async move {
            let result = source.fetch(&image_source).await;
            if token.is_cancelled() {
                return;
            }
            let _ = tx.send(result);
        });

        slot.status = TextureStatus::Loading;
        slot.pending = Some(rx);
        slot.task = Some(task);
        slot
    }
}

impl std::fmt::Debug for TextureLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextureLoader").finish_non_exhaustive()
    }
}
