// file: src/network/blocking.rs
// version: 1.0.0
// guid: 2f7b0c94-8e16-4a3d-b5c2-9d4e1a6f3b87

//! Running blocking I/O off the async runtime
//!
//! `ssh2` is a blocking library. Each round trip moves the owned session onto
//! tokio's blocking pool and takes it back when the call returns, so the
//! runtime keeps servicing signals while a remote command runs.

use crate::error::BundlerError;
use crate::Result;

/// Owned state that is lent to a blocking thread for each call
#[derive(Debug)]
pub struct BlockingCell<T> {
    inner: Option<T>,
}

impl<T: Send + 'static> BlockingCell<T> {
    pub fn new(value: T) -> Self {
        Self { inner: Some(value) }
    }

    pub fn empty() -> Self {
        Self { inner: None }
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_none()
    }

    pub fn take(&mut self) -> Option<T> {
        self.inner.take()
    }

    /// Run `f` on the blocking pool with exclusive access to the value.
    ///
    /// If the returned future is dropped before completion the value stays
    /// with the blocking thread and the cell is left empty.
    pub async fn with<R, F>(&mut self, f: F) -> Result<R>
    where
        F: FnOnce(&mut T) -> Result<R> + Send + 'static,
        R: Send + 'static,
    {
        let mut value = self
            .inner
            .take()
            .ok_or_else(|| BundlerError::ssh("No active SSH session"))?;

        let (value, result) = tokio::task::spawn_blocking(move || {
            let result = f(&mut value);
            (value, result)
        })
        .await
        .map_err(|e| BundlerError::ssh(format!("Blocking SSH task failed: {}", e)))?;

        self.inner = Some(value);
        result
    }
}

impl<T> Default for BlockingCell<T> {
    fn default() -> Self {
        Self { inner: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_value_comes_back_after_call() -> Result<()> {
        let mut cell = BlockingCell::new(1u32);
        let seen = cell
            .with(|n| {
                *n += 1;
                Ok(*n)
            })
            .await?;
        assert_eq!(seen, 2);
        assert_eq!(cell.take(), Some(2));
        Ok(())
    }

    #[tokio::test]
    async fn test_error_keeps_value() {
        let mut cell = BlockingCell::new(String::from("session"));
        let result: Result<()> = cell
            .with(|_| Err(BundlerError::ssh("remote hung up")))
            .await;
        assert!(result.is_err());
        assert!(!cell.is_empty());
    }

    #[tokio::test]
    async fn test_empty_cell_is_an_ssh_error() {
        let mut cell: BlockingCell<u8> = BlockingCell::empty();
        let err = cell.with(|_| Ok(())).await.unwrap_err();
        assert!(matches!(err, BundlerError::SshError(_)));
    }
}
