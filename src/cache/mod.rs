//! 对象缓存层
//!
//! 通过插件注册表选择缓存后端（moka 内存缓存 / redis），
//! 后端在编译期通过 `declare_object_cache_plugin!` 宏注册。

pub mod object_cache;
pub mod register;
pub mod traits;

pub use traits::{CacheResult, ObjectCache};

/// 声明并注册一个对象缓存插件
///
/// 在模块加载时（ctor）把构造函数注册进全局插件表，
/// 运行时按配置的名称取用。
#[macro_export]
macro_rules! declare_object_cache_plugin {
    ($name:literal, $cache_type:ty) => {
        #[ctor::ctor]
        fn __register_object_cache_plugin() {
            $crate::cache::register::register_object_cache_plugin(
                $name,
                std::sync::Arc::new(|| {
                    Box::pin(async {
                        let cache = <$cache_type>::new()
                            .map_err($crate::errors::PortalError::cache_connection)?;
                        Ok(Box::new(cache) as Box<dyn $crate::cache::ObjectCache>)
                    })
                        as $crate::cache::register::BoxedObjectCacheFuture
                }),
            );
        }
    };
}
