//! Theme Engine - 현재 테마 상태와 변경 알림
//!
//! `set_theme` 호출자는 리스너 실행을 기다리지 않습니다. 알림은
//! `tokio::spawn`으로 지연 실행되어 호출 스택이 풀린 뒤 관찰됩니다.

use super::palettes;
use async_trait::async_trait;
use folio_foundation::event::ListenerId;
use folio_foundation::{Result, ThemeDefinition, ThemeId};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

// ============================================================================
// ThemeListener
// ============================================================================

/// 테마 변경 리스너 trait
///
/// Err를 반환해도 다른 리스너 알림을 막지 않습니다 (로깅 후 무시).
#[async_trait]
pub trait ThemeListener: Send + Sync {
    /// 리스너 이름 (디버깅용)
    fn name(&self) -> &str;

    /// 테마 변경 처리
    async fn on_theme_change(&self, old: ThemeId, new: ThemeId) -> Result<()>;
}

// ============================================================================
// ThemeEngine
// ============================================================================

/// 테마 엔진
///
/// ## 계약
///
/// - 무효한 식별자는 항상 기본 테마로 대체 (에러 없음)
/// - 현재 테마와 같은 값으로의 `set_theme`은 no-op (리스너 알림 0회)
/// - 리스너 알림은 `set_theme` 반환 이후에 실행됨
pub struct ThemeEngine {
    /// 현재 테마
    current: RwLock<ThemeId>,

    /// 등록된 리스너
    listeners: RwLock<HashMap<ListenerId, Arc<dyn ThemeListener>>>,

    /// 리스너 ID 카운터
    listener_counter: AtomicU64,
}

impl ThemeEngine {
    /// 기본 테마로 초기화된 엔진 생성
    pub fn new() -> Self {
        Self {
            current: RwLock::new(ThemeId::DEFAULT),
            listeners: RwLock::new(HashMap::new()),
            listener_counter: AtomicU64::new(0),
        }
    }

    /// 현재 테마 조회
    pub async fn current(&self) -> ThemeId {
        *self.current.read().await
    }

    /// 현재 테마의 정의 조회
    pub async fn definition(&self) -> &'static ThemeDefinition {
        palettes::definition(self.current().await)
    }

    /// 테마 변경
    ///
    /// 무효한 입력은 기본 테마로 대체됩니다. 현재 테마와 같으면
    /// 아무 일도 하지 않습니다. 변경 시 리스너 알림은 비동기로
    /// 예약되어 이 메서드가 반환된 뒤에 실행됩니다.
    pub async fn set_theme(&self, raw: &str) -> ThemeId {
        let target = match ThemeId::parse(raw) {
            Some(id) => id,
            None => {
                warn!(requested = raw, "Unknown theme identifier, substituting default");
                ThemeId::DEFAULT
            }
        };

        let old = {
            let mut current = self.current.write().await;
            if *current == target {
                // no-op: 리스너 알림 없음
                return target;
            }
            let old = *current;
            *current = target;
            old
        };

        debug!(old = %old, new = %target, "Theme changed");

        // 지연 알림 - 호출자는 리스너 실행을 기다리지 않음
        let listeners: Vec<(ListenerId, Arc<dyn ThemeListener>)> = {
            let listeners = self.listeners.read().await;
            listeners.iter().map(|(id, l)| (*id, Arc::clone(l))).collect()
        };

        tokio::spawn(async move {
            for (id, listener) in listeners {
                if let Err(e) = listener.on_theme_change(old, target).await {
                    warn!(
                        listener_id = %id,
                        listener_name = listener.name(),
                        error = %e,
                        "Theme listener failed, continuing"
                    );
                }
            }
        });

        target
    }

    /// 리스너 등록 - 해제용 ID 반환
    pub async fn subscribe(&self, listener: Arc<dyn ThemeListener>) -> ListenerId {
        let id = ListenerId::new(self.listener_counter.fetch_add(1, Ordering::SeqCst));

        debug!(
            listener_name = listener.name(),
            listener_id = %id,
            "Registering theme listener"
        );

        let mut listeners = self.listeners.write().await;
        listeners.insert(id, listener);

        id
    }

    /// 리스너 해제
    pub async fn unsubscribe(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.write().await;
        listeners.remove(&id).is_some()
    }

    /// 등록된 리스너 수
    pub async fn listener_count(&self) -> usize {
        self.listeners.read().await.len()
    }
}

impl Default for ThemeEngine {
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
    use folio_foundation::Error;
    use std::sync::atomic::AtomicUsize;
    use std::time::Duration;

    struct CountingListener {
        count: AtomicUsize,
        fail: bool,
    }

    impl CountingListener {
        fn new() -> Self {
            Self {
                count: AtomicUsize::new(0),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                count: AtomicUsize::new(0),
                fail: true,
            }
        }

        fn calls(&self) -> usize {
            self.count.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ThemeListener for CountingListener {
        fn name(&self) -> &str {
            "counting"
        }

        async fn on_theme_change(&self, _old: ThemeId, _new: ThemeId) -> Result<()> {
            self.count.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(Error::Theme("listener exploded".into()));
            }
            Ok(())
        }
    }

    async fn drain_notifications() {
        // spawn된 알림 태스크가 실행될 시간을 줌
        tokio::time::sleep(Duration::from_millis(20)).await;
    }

    #[tokio::test]
    async fn test_invalid_theme_falls_back_to_default() {
        let engine = ThemeEngine::new();
        let applied = engine.set_theme("vaporwave").await;
        assert_eq!(applied, ThemeId::DEFAULT);
        assert_eq!(engine.current().await, ThemeId::DEFAULT);
    }

    #[tokio::test]
    async fn test_notification_is_deferred() {
        let engine = ThemeEngine::new();
        let listener = Arc::new(CountingListener::new());
        engine.subscribe(listener.clone()).await;

        engine.set_theme("aurora").await;

        // set_theme이 반환된 직후에는 아직 알림이 실행되지 않음
        assert_eq!(listener.calls(), 0);

        drain_notifications().await;
        assert_eq!(listener.calls(), 1);
    }

    #[tokio::test]
    async fn test_same_theme_is_noop() {
        let engine = ThemeEngine::new();
        let listener = Arc::new(CountingListener::new());
        engine.subscribe(listener.clone()).await;

        engine.set_theme("aurora").await;
        drain_notifications().await;
        assert_eq!(listener.calls(), 1);

        // 같은 테마로 다시 설정 - 알림 0회
        engine.set_theme("aurora").await;
        drain_notifications().await;
        assert_eq!(listener.calls(), 1);
    }

    #[tokio::test]
    async fn test_failing_listener_does_not_block_others() {
        let engine = ThemeEngine::new();
        let bad = Arc::new(CountingListener::failing());
        let good = Arc::new(CountingListener::new());
        engine.subscribe(bad.clone()).await;
        engine.subscribe(good.clone()).await;

        engine.set_theme("paper").await;
        drain_notifications().await;

        assert_eq!(bad.calls(), 1);
        assert_eq!(good.calls(), 1);
    }

    #[tokio::test]
    async fn test_unsubscribe() {
        let engine = ThemeEngine::new();
        let listener = Arc::new(CountingListener::new());
        let id = engine.subscribe(listener.clone()).await;

        assert!(engine.unsubscribe(id).await);
        assert!(!engine.unsubscribe(id).await);

        engine.set_theme("paper").await;
        drain_notifications().await;
        assert_eq!(listener.calls(), 0);
    }
}
