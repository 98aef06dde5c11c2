use crate::Result;

/// Run blocking filesystem work without stalling the async runtime.
#[cfg(any(
    feature = "blocking",
    all(
        feature = "implicit-blocking",
        not(any(feature = "rt_tokio_1", feature = "rt_async-std_1")),
    )
))]
pub async fn run_blocking<F, T>(f: F) -> Result<T>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    Ok(f())
}

#[cfg(all(feature = "rt_tokio_1", not(feature = "blocking")))]
pub async fn run_blocking<F, T>(f: F) -> Result<T>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|err| crate::Error::TaskFailed(err.to_string()))
}

#[cfg(all(
    feature = "rt_async-std_1",
    not(any(feature = "blocking", feature = "rt_tokio_1"))
))]
pub async fn run_blocking<F, T>(f: F) -> Result<T>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    Ok(async_std::task::spawn_blocking(f).await)
}
