use async_trait::async_trait;
use redis::{AsyncCommands, aio::MultiplexedConnection};
use tracing::{debug, error, warn};

use crate::cache::{CacheResult, ObjectCache};
use crate::config::AppConfig;
use crate::declare_object_cache_plugin;

declare_object_cache_plugin!("redis", RedisObjectCache);

/// 未配置前缀时的键命名空间，避免与共用实例上的其他应用冲突
const DEFAULT_KEY_PREFIX: &str = "feedback:";

pub struct RedisObjectCache {
    client: redis::Client,
    key_prefix: String,
    ttl: u64, // 秒
}

impl RedisObjectCache {
    pub fn new() -> Result<Self, String> {
        let config = AppConfig::get();
        let redis_config = &config.cache.redis;

        let key_prefix = if redis_config.key_prefix.is_empty() {
            DEFAULT_KEY_PREFIX.to_string()
        } else {
            redis_config.key_prefix.clone()
        };

        let client = redis::Client::open(redis_config.url.clone())
            .map_err(|e| format!("Invalid Redis URL '{}': {e}", redis_config.url))?;

        // 启动时同步 PING 探活，失败则由启动逻辑回退到内存后端
        let mut conn = client
            .get_connection()
            .map_err(|e| format!("Redis connection failed: {e}"))?;
        redis::cmd("PING")
            .query::<String>(&mut conn)
            .map_err(|e| format!("Redis ping failed: {e}"))?;

        debug!(
            "RedisObjectCache ready, prefix: '{}', TTL: {}s",
            key_prefix, config.cache.default_ttl
        );

        Ok(Self {
            client,
            key_prefix,
            ttl: config.cache.default_ttl,
        })
    }

    async fn get_connection(&self) -> Result<MultiplexedConnection, redis::RedisError> {
        self.client.get_multiplexed_async_connection().await
    }

    fn make_key(&self, key: &str) -> String {
        format!("{}{}", self.key_prefix, key)
    }
}

#[async_trait]
impl ObjectCache for RedisObjectCache {
    async fn get_raw(&self, key: &str) -> CacheResult<String> {
        let mut conn = match self.get_connection().await {
            Ok(conn) => conn,
            Err(e) => {
                error!("Redis connection unavailable: {}", e);
                return CacheResult::ExistsButNoValue;
            }
        };

        match conn.get::<_, Option<String>>(self.make_key(key)).await {
            Ok(Some(data)) => CacheResult::Found(data),
            Ok(None) => CacheResult::NotFound,
            Err(e) => {
                error!("Redis GET failed for key '{}': {}", key, e);
                CacheResult::ExistsButNoValue
            }
        }
    }

    async fn insert_raw(&self, key: String, value: String, ttl: u64) {
        let mut conn = match self.get_connection().await {
            Ok(conn) => conn,
            Err(e) => {
                error!("Redis connection unavailable: {}", e);
                return;
            }
        };

        // 传入 0 表示使用配置的默认 TTL
        let effective_ttl = if ttl == 0 { self.ttl } else { ttl };

        if let Err(e) = conn
            .set_ex::<_, _, ()>(self.make_key(&key), value, effective_ttl)
            .await
        {
            error!("Redis SETEX failed for key '{}': {}", key, e);
        } else {
            debug!("Cached key '{}' (TTL: {}s)", key, effective_ttl);
        }
    }

    async fn remove(&self, key: &str) {
        let mut conn = match self.get_connection().await {
            Ok(conn) => conn,
            Err(e) => {
                error!("Redis connection unavailable: {}", e);
                return;
            }
        };

        if let Err(e) = conn.del::<_, i64>(self.make_key(key)).await {
            error!("Redis DEL failed for key '{}': {}", key, e);
        }
    }

    async fn invalidate_all(&self) {
        // 键空间可能与其他应用共享，不做全量清理
        warn!("RedisObjectCache does not implement invalidate_all");
    }
}
