use std::num::NonZeroUsize;
use std::time::SystemTime;

use bytes::Bytes;
use lru::LruCache;

/// 一个已读入内存的静态资源
#[derive(Clone, Debug, PartialEq)]
pub struct CachedAsset {
    pub content: Bytes,
    pub mime: &'static str,
    modified_time: SystemTime,
}

/// 静态资源的 LRU 缓存。以文件路径为键，修改时间变化即视为失效。
pub struct FileCache {
    cache: LruCache<String, CachedAsset>,
}

impl FileCache {
    /// 容量为 0 时按 1 处理
    pub fn from_capacity(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: LruCache::new(capacity),
        }
    }

    pub fn push(&mut self, filename: &str, content: Bytes, mime: &'static str, modified_time: SystemTime) {
        let entry = CachedAsset {
            content,
            mime,
            modified_time,
        };
        self.cache.put(filename.to_string(), entry);
    }

    /// 文件是否小到可以放进缓存
    pub fn should_cache(file_size: u64, limit: u64) -> bool {
        file_size <= limit
    }

    /// 查询有效缓存。已过期的条目会被移除。
    pub fn find(&mut self, filename: &str, current_modified_time: SystemTime) -> Option<CachedAsset> {
        let fresh = match self.cache.get(filename) {
            Some(entry) => entry.modified_time == current_modified_time,
            None => return None,
        };
        if fresh {
            self.cache.get(filename).cloned()
        } else {
            self.cache.pop(filename);
            None
        }
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.cache.cap().get()
    }
}
