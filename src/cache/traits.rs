use async_trait::async_trait;

/// 缓存查询结果
#[derive(Debug, Clone, PartialEq)]
pub enum CacheResult<T> {
    /// 命中
    Found(T),
    /// 键不存在
    NotFound,
    /// 键存在但取值失败（后端错误等，按未命中处理）
    ExistsButNoValue,
}

/// 对象缓存统一接口
///
/// 所有后端以字符串形式存取，调用方负责序列化。
#[async_trait]
pub trait ObjectCache: Send + Sync {
    async fn get_raw(&self, key: &str) -> CacheResult<String>;

    /// 插入键值，ttl 为 0 时使用后端默认 TTL
    async fn insert_raw(&self, key: String, value: String, ttl: u64);

    async fn remove(&self, key: &str);

    async fn invalidate_all(&self);
}
