#[macro_export]
macro_rules! reexport_executor {
    ($executor:ident) => {
        paste::paste! {
            #[doc = concat!("A [CacheService] running background work on the [", stringify!($executor), "Executor].")]
            pub type [<$executor CacheService>] = $crate::CacheService<$crate::executors::$executor>;
            pub use $crate::executors::$executor as [<$executor Executor>];

            #[allow(dead_code)]
            const _: () = {
                fn assert_executor<T: $crate::traits::Executor>() {}
                fn assert_send<T: Send + Sync>() {}

                fn assert_all() {
                    assert_executor::<$crate::executors::$executor>();
                    assert_send::<$crate::executors::$executor>();
                }
            };
        }
    };
}

#[cfg(test)]
#[macro_export]
macro_rules! async_test {
    ($(async fn $name:ident () $body:block)+) => {
        $(
            paste::paste! {
                #[cfg_attr(not(feature = "rt_async-std_1"), tokio::test(flavor = "current_thread"))]
                #[cfg_attr(feature = "rt_async-std_1", async_std::test)]
                async fn [<$name _ st>] () $body

                #[cfg_attr(not(feature = "rt_async-std_1"), tokio::test(flavor = "multi_thread"))]
                #[cfg_attr(feature = "rt_async-std_1", async_std::test)]
                async fn [<$name _ mt>] () $body
            }
        )+
    };
}
