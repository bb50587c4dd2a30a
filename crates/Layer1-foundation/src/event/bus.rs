//! Change Bus - 설정 변경 이벤트 전달
//!
//! 설정 변경을 리스너에게 동기 전달하고, 고정 용량 히스토리 링에
//! 보관합니다. 실패하는 리스너는 로깅 후 건너뛰며 나머지 전달을
//! 막지 않습니다.

use super::types::ConfigChangeEvent;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

// ============================================================================
// ChangeListener Trait
// ============================================================================

/// 리스너 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    /// 카운터 값으로 생성
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ListenerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "listener-{}", self.0)
    }
}

/// 설정 변경 리스너 trait
///
/// `on_change`가 Err를 반환해도 다른 리스너 전달은 계속되고,
/// 변경을 일으킨 호출자에게 전파되지 않습니다.
#[async_trait]
pub trait ChangeListener: Send + Sync {
    /// 리스너 이름 (디버깅용)
    fn name(&self) -> &str;

    /// 변경 이벤트 처리
    async fn on_change(&self, event: &ConfigChangeEvent) -> Result<()>;
}

// ============================================================================
// ChangeBus
// ============================================================================

/// 체인지 버스 설정
#[derive(Debug, Clone)]
pub struct ChangeBusConfig {
    /// 히스토리 링 용량 (가장 오래된 것부터 밀려남)
    pub history_capacity: usize,
}

impl Default for ChangeBusConfig {
    fn default() -> Self {
        Self {
            history_capacity: 100,
        }
    }
}

/// 설정 변경 이벤트 버스
///
/// ## 사용법
///
/// ```ignore
/// use folio_foundation::event::{ChangeBus, ConfigChangeEvent};
///
/// let bus = ChangeBus::new();
/// let id = bus.subscribe(my_listener).await;
/// bus.publish(ConfigChangeEvent::global("defaults updated")).await;
/// bus.unsubscribe(id).await;
/// ```
pub struct ChangeBus {
    /// 설정
    config: ChangeBusConfig,

    /// 등록된 리스너
    listeners: RwLock<HashMap<ListenerId, Arc<dyn ChangeListener>>>,

    /// 리스너 ID 카운터
    listener_counter: AtomicU64,

    /// 이벤트 히스토리 링
    history: RwLock<VecDeque<ConfigChangeEvent>>,

    /// 발행된 이벤트 수
    event_count: AtomicU64,
}

impl ChangeBus {
    /// 기본 설정으로 생성
    pub fn new() -> Self {
        Self::with_config(ChangeBusConfig::default())
    }

    /// 커스텀 설정으로 생성
    pub fn with_config(config: ChangeBusConfig) -> Self {
        Self {
            config,
            listeners: RwLock::new(HashMap::new()),
            listener_counter: AtomicU64::new(0),
            history: RwLock::new(VecDeque::new()),
            event_count: AtomicU64::new(0),
        }
    }

    /// 리스너 등록
    pub async fn subscribe(&self, listener: Arc<dyn ChangeListener>) -> ListenerId {
        let id = ListenerId::new(self.listener_counter.fetch_add(1, Ordering::SeqCst));

        debug!(
            listener_name = listener.name(),
            listener_id = %id,
            "Registering change listener"
        );

        let mut listeners = self.listeners.write().await;
        listeners.insert(id, listener);

        id
    }

    /// 리스너 해제
    pub async fn unsubscribe(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.write().await;
        let removed = listeners.remove(&id).is_some();

        if removed {
            debug!(listener_id = %id, "Unregistered change listener");
        }

        removed
    }

    /// 이벤트 발행
    ///
    /// 히스토리 링에 기록한 뒤 모든 리스너에게 전달합니다.
    pub async fn publish(&self, event: ConfigChangeEvent) {
        self.event_count.fetch_add(1, Ordering::SeqCst);

        // 히스토리 링에 추가 (용량 초과 시 가장 오래된 것 제거)
        {
            let mut history = self.history.write().await;
            history.push_back(event.clone());
            while history.len() > self.config.history_capacity {
                history.pop_front();
            }
        }

        // 등록된 리스너들에게 전달 - 실패는 격리
        let listeners: Vec<(ListenerId, Arc<dyn ChangeListener>)> = {
            let listeners = self.listeners.read().await;
            listeners.iter().map(|(id, l)| (*id, Arc::clone(l))).collect()
        };

        for (id, listener) in listeners {
            if let Err(e) = listener.on_change(&event).await {
                warn!(
                    listener_id = %id,
                    listener_name = listener.name(),
                    error = %e,
                    "Change listener failed, continuing"
                );
            }
        }
    }

    /// 최근 이벤트 히스토리 조회 (최신순)
    pub async fn history(&self, limit: Option<usize>) -> Vec<ConfigChangeEvent> {
        let history = self.history.read().await;
        let limit = limit.unwrap_or(history.len());
        history.iter().rev().take(limit).cloned().collect()
    }

    /// 등록된 리스너 수
    pub async fn listener_count(&self) -> usize {
        self.listeners.read().await.len()
    }

    /// 총 발행된 이벤트 수
    pub fn event_count(&self) -> u64 {
        self.event_count.load(Ordering::SeqCst)
    }

    /// 히스토리 클리어
    pub async fn clear_history(&self) {
        let mut history = self.history.write().await;
        history.clear();
    }
}

impl Default for ChangeBus {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// 테스트
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::sync::atomic::AtomicUsize;

    struct TestListener {
        name: String,
        count: AtomicUsize,
        fail: bool,
    }

    impl TestListener {
        fn new(name: &str) -> Self {
            Self {
                name: name.to_string(),
                count: AtomicUsize::new(0),
                fail: false,
            }
        }

        fn failing(name: &str) -> Self {
            Self {
                name: name.to_string(),
                count: AtomicUsize::new(0),
                fail: true,
            }
        }

        fn call_count(&self) -> usize {
            self.count.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ChangeListener for TestListener {
        fn name(&self) -> &str {
            &self.name
        }

        async fn on_change(&self, _event: &ConfigChangeEvent) -> Result<()> {
            self.count.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(Error::Internal("listener exploded".into()));
            }
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_change_bus_basic() {
        let bus = ChangeBus::new();

        let listener = Arc::new(TestListener::new("test"));
        let id = bus.subscribe(listener.clone()).await;

        assert_eq!(bus.listener_count().await, 1);

        bus.publish(ConfigChangeEvent::global("defaults updated")).await;
        assert_eq!(listener.call_count(), 1);

        bus.unsubscribe(id).await;
        assert_eq!(bus.listener_count().await, 0);
    }

    #[tokio::test]
    async fn test_failing_listener_does_not_block_others() {
        let bus = ChangeBus::new();

        let bad = Arc::new(TestListener::failing("bad"));
        let good = Arc::new(TestListener::new("good"));
        bus.subscribe(bad.clone()).await;
        bus.subscribe(good.clone()).await;

        bus.publish(ConfigChangeEvent::component("hero_prism", "override applied")).await;

        // 실패한 리스너도 호출은 되었고, 나머지 전달도 이뤄짐
        assert_eq!(bad.call_count(), 1);
        assert_eq!(good.call_count(), 1);
    }

    #[tokio::test]
    async fn test_history_ring_eviction() {
        let bus = ChangeBus::with_config(ChangeBusConfig {
            history_capacity: 5,
        });

        for i in 0..10 {
            bus.publish(ConfigChangeEvent::global(format!("change {}", i))).await;
        }

        // 히스토리는 최근 5개만 유지, 최신이 먼저
        let history = bus.history(None).await;
        assert_eq!(history.len(), 5);
        assert_eq!(history[0].description, "change 9");
        assert_eq!(history[4].description, "change 5");
        assert_eq!(bus.event_count(), 10);
    }
}
