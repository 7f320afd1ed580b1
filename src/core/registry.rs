//! # Component Registry - 의존성 주입 컨테이너
//!
//! 리포지토리, 서비스, 컨트롤러를 이름과 타입으로 찾아주는 싱글톤 기반 컨테이너입니다.
//! 각 컴포넌트는 `register_component!`로 컴파일 타임에 `inventory`에 등록되고,
//! 처음 요청될 때 생성되어 로케이터 안에 캐시됩니다.
//!
//! ## 구성 요소
//!
//! - **ComponentRegistration**: 이름, 종류, 타입, 생성자 함수로 이루어진 등록 정보
//! - **ServiceLocator**: 생성된 인스턴스 캐시 + 순환 의존성 감지
//! - **register_component!**: 등록 정보를 `inventory::submit!`으로 제출하는 매크로
//!
//! ## 동작 원리
//!
//! ```text
//! 1. 컴파일 타임
//!    └─ register_component!(Controller, "artwork", ArtworkController, ArtworkController::from_locator)
//!         → inventory::submit! { ComponentRegistration { .. } }
//!
//! 2. 런타임 초기화
//!    ├─ locator.set(Arc<DataStore>), locator.set(Arc<AppConfig>)   // 인프라 직접 등록
//!    └─ locator.initialize_all()  // Repository → Service → Controller 순서로 생성
//!
//! 3. 라우터 구성
//!    └─ locator.resolve_as::<ArtworkController>("artwork")  // 이름 기반 해석
//! ```
//!
//! ## 해석 규칙
//!
//! - 같은 로케이터에서 같은 이름(또는 타입)은 항상 같은 `Arc` 인스턴스를 돌려줍니다.
//! - 같은 스레드에서 생성 중인 타입을 다시 요청하면 `ConfigurationError`로 순환 의존성을 보고합니다.
//!   다른 스레드가 같은 타입을 동시에 생성하는 것은 순환이 아니며, 먼저 저장된 인스턴스가 공유됩니다.
//! - 등록되지 않은 이름/타입 요청도 `ConfigurationError`입니다.
//!
//! ```rust,ignore
//! let locator = ServiceLocator::global();
//! locator.set(Arc::new(DataStore::new()));
//! locator.set(Arc::new(AppConfig::from_env()));
//! locator.initialize_all()?;
//!
//! let artworks = locator.resolve_as::<ArtworkController>("artwork")?;
//! ```

use std::any::{Any, TypeId};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, PoisonError, RwLock};
use std::thread::{self, ThreadId};
use once_cell::sync::Lazy;
use crate::core::errors::{AppError, AppResult};
use crate::utils::display_terminal::{
    print_boxed_title, print_cache_initialized, print_final_summary, print_step_complete,
    print_step_start, print_sub_task,
};

/// 컨테이너에 보관되는 인스턴스 타입
pub type SharedComponent = Arc<dyn Any + Send + Sync>;

/// 컴포넌트 계층
///
/// `initialize_all()`은 이 순서(Repository → Service → Controller)로 인스턴스를 생성합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Repository,
    Service,
    Controller,
}

impl ComponentKind {
    pub fn label(&self) -> &'static str {
        match self {
            ComponentKind::Repository => "Repository",
            ComponentKind::Service => "Service",
            ComponentKind::Controller => "Controller",
        }
    }
}

/// 컴포넌트 등록 정보
///
/// `register_component!` 매크로가 생성하며, `inventory`를 통해 전역으로 수집됩니다.
pub struct ComponentRegistration {
    /// 컴포넌트의 고유 이름 (컨트롤러는 라우터가 이 이름으로 해석)
    pub name: &'static str,
    /// 컴포넌트 계층
    pub kind: ComponentKind,
    /// 등록된 구체 타입의 `TypeId`
    pub type_id: fn() -> TypeId,
    /// 인스턴스 생성 함수. 의존성은 전달된 로케이터에서 해석합니다.
    pub constructor: fn(&ServiceLocator) -> AppResult<SharedComponent>,
}

inventory::collect!(ComponentRegistration);

/// 이름 → 등록정보 인덱스. 첫 접근 시 한 번만 구성됩니다.
static NAME_INDEX: Lazy<HashMap<&'static str, &'static ComponentRegistration>> = Lazy::new(|| {
    let mut index = HashMap::new();

    for registration in inventory::iter::<ComponentRegistration>() {
        if index.insert(registration.name, registration).is_some() {
            log::warn!("중복된 컴포넌트 이름: {}", registration.name);
        }
    }

    print_cache_initialized("Component name", index.len());
    index
});

/// 타입 → 등록정보 인덱스
static TYPE_INDEX: Lazy<HashMap<TypeId, &'static ComponentRegistration>> = Lazy::new(|| {
    inventory::iter::<ComponentRegistration>()
        .map(|registration| ((registration.type_id)(), registration))
        .collect()
});

/// 전역 로케이터
static LOCATOR: Lazy<ServiceLocator> = Lazy::new(ServiceLocator::new);

/// `initialize_all()` 결과 요약
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InitializationSummary {
    pub repositories: usize,
    pub services: usize,
    pub controllers: usize,
}

impl InitializationSummary {
    pub fn total(&self) -> usize {
        self.repositories + self.services + self.controllers
    }
}

/// 싱글톤 의존성 주입 컨테이너
///
/// 애플리케이션은 `ServiceLocator::global()`을 사용하고,
/// 테스트는 `ServiceLocator::new()`로 격리된 컨테이너를 만들어 사용합니다.
pub struct ServiceLocator {
    /// 생성되었거나 직접 등록된 인스턴스 캐시
    instances: RwLock<HashMap<TypeId, SharedComponent>>,
    /// 스레드별로 현재 생성 중인 타입들 (순환 참조 감지용)
    initializing: RwLock<HashSet<(ThreadId, TypeId)>>,
}

impl Default for ServiceLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl ServiceLocator {
    pub fn new() -> Self {
        Self {
            instances: RwLock::new(HashMap::new()),
            initializing: RwLock::new(HashSet::new()),
        }
    }

    /// 애플리케이션 전역 로케이터
    pub fn global() -> &'static ServiceLocator {
        &LOCATOR
    }

    /// 외부에서 생성된 인스턴스(데이터 스토어, 설정 등)를 직접 등록합니다.
    ///
    /// 이미 같은 타입이 있으면 교체합니다.
    pub fn set<T: Any + Send + Sync>(&self, instance: Arc<T>) {
        let clean_name = Self::extract_clean_type_name(std::any::type_name::<T>());
        log::info!("📦 Registering: {}", clean_name);

        self.instances
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(TypeId::of::<T>(), instance as SharedComponent);
    }

    /// 지정된 타입의 싱글톤 인스턴스를 가져옵니다.
    ///
    /// 1. 캐시에 있으면 그대로 반환
    /// 2. 없으면 타입 인덱스에서 등록 정보를 찾아 생성 후 캐시
    pub fn get<T: Any + Send + Sync>(&self) -> AppResult<Arc<T>> {
        let type_id = TypeId::of::<T>();

        if let Some(instance) = self.cached(type_id) {
            return Self::downcast::<T>(instance, std::any::type_name::<T>());
        }

        let registration = TYPE_INDEX.get(&type_id).ok_or_else(|| {
            AppError::ConfigurationError(format!(
                "Component not found: {}. register_component! 로 등록하거나 ServiceLocator::set() 으로 직접 등록하세요",
                std::any::type_name::<T>()
            ))
        })?;

        let instance = self.instantiate(registration)?;
        Self::downcast::<T>(instance, registration.name)
    }

    /// 이름으로 컴포넌트를 해석합니다.
    ///
    /// 같은 이름은 항상 같은 인스턴스를 돌려줍니다.
    pub fn resolve(&self, name: &str) -> AppResult<SharedComponent> {
        let registration = NAME_INDEX.get(name).ok_or_else(|| {
            AppError::ConfigurationError(format!("No component registered under name: {}", name))
        })?;

        self.instantiate(registration)
    }

    /// 이름으로 해석한 뒤 구체 타입으로 변환합니다.
    pub fn resolve_as<T: Any + Send + Sync>(&self, name: &str) -> AppResult<Arc<T>> {
        let instance = self.resolve(name)?;
        Self::downcast::<T>(instance, name)
    }

    /// 지정된 종류로 등록된 이름 목록 (정렬됨)
    pub fn registered_names(kind: ComponentKind) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = inventory::iter::<ComponentRegistration>()
            .filter(|registration| registration.kind == kind)
            .map(|registration| registration.name)
            .collect();
        names.sort_unstable();
        names
    }

    /// 등록된 모든 컴포넌트를 미리 생성합니다.
    ///
    /// Repository → Service → Controller 순서로 생성하며,
    /// 하나라도 실패하면 즉시 에러를 반환합니다.
    pub fn initialize_all(&self) -> AppResult<InitializationSummary> {
        print_boxed_title("🔄 INITIALIZING COMPONENT REGISTRY");

        let mut summary = InitializationSummary::default();
        let steps = [
            ComponentKind::Repository,
            ComponentKind::Service,
            ComponentKind::Controller,
        ];

        for (index, kind) in steps.iter().enumerate() {
            let step = (index + 1) as u8;
            let mut registrations: Vec<&'static ComponentRegistration> =
                inventory::iter::<ComponentRegistration>()
                    .filter(|registration| registration.kind == *kind)
                    .collect();
            registrations.sort_unstable_by_key(|registration| registration.name);

            if registrations.is_empty() {
                continue;
            }

            print_step_start(step, &format!("Creating {} instances", kind.label()));
            for registration in &registrations {
                print_sub_task(registration.name, "Creating...");
                self.instantiate(registration)?;
                print_sub_task(registration.name, "✓ Created");
            }
            print_step_complete(step, &format!("{} instances created", kind.label()), registrations.len());

            match kind {
                ComponentKind::Repository => summary.repositories = registrations.len(),
                ComponentKind::Service => summary.services = registrations.len(),
                ComponentKind::Controller => summary.controllers = registrations.len(),
            }
        }

        print_final_summary(summary.repositories, summary.services, summary.controllers);
        Ok(summary)
    }

    fn cached(&self, type_id: TypeId) -> Option<SharedComponent> {
        self.instances
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .cloned()
    }

    /// 등록 정보로 인스턴스를 생성(또는 캐시에서 조회)합니다.
    ///
    /// 생성자 호출 동안에는 락을 잡지 않으므로 생성자 안에서 다른 의존성을 해석할 수 있습니다.
    fn instantiate(&self, registration: &'static ComponentRegistration) -> AppResult<SharedComponent> {
        let type_id = (registration.type_id)();
        let key = (thread::current().id(), type_id);

        if let Some(instance) = self.cached(type_id) {
            return Ok(instance);
        }

        {
            let mut initializing = self.initializing.write().unwrap_or_else(PoisonError::into_inner);
            if !initializing.insert(key) {
                log::error!("❌ Circular dependency detected for component: {}", registration.name);
                return Err(AppError::ConfigurationError(format!(
                    "Circular dependency detected: {} is already being initialized",
                    registration.name
                )));
            }
        }

        let created = (registration.constructor)(self);

        self.initializing
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&key);

        let created = created.map_err(|e| {
            log::error!("Failed to create component {}: {}", registration.name, e);
            e
        })?;

        // 동시에 생성된 경우 먼저 저장된 인스턴스를 사용
        let mut instances = self.instances.write().unwrap_or_else(PoisonError::into_inner);
        let instance = instances.entry(type_id).or_insert(created).clone();
        Ok(instance)
    }

    fn downcast<T: Any + Send + Sync>(instance: SharedComponent, name: &str) -> AppResult<Arc<T>> {
        instance.downcast::<T>().map_err(|_| {
            AppError::ConfigurationError(format!(
                "Type mismatch for component {}: expected {}",
                name,
                std::any::type_name::<T>()
            ))
        })
    }

    /// `art_gallery_backend::services::ArtworkService` → `ArtworkService`
    fn extract_clean_type_name(type_name: &str) -> String {
        match type_name.rfind("::") {
            Some(pos) => type_name[pos + 2..].to_string(),
            None => type_name.to_string(),
        }
    }
}

/// 컴포넌트를 레지스트리에 등록합니다.
///
/// 생성자는 `fn(&ServiceLocator) -> AppResult<T>` 형태여야 합니다.
///
/// ```rust,ignore
/// register_component!(Service, "artwork_service", ArtworkService, ArtworkService::from_locator);
/// ```
macro_rules! register_component {
    ($kind:ident, $name:literal, $ty:ty, $ctor:path) => {
        ::inventory::submit! {
            $crate::core::registry::ComponentRegistration {
                name: $name,
                kind: $crate::core::registry::ComponentKind::$kind,
                type_id: || ::std::any::TypeId::of::<$ty>(),
                constructor: |locator| {
                    let instance: $ty = $ctor(locator)?;
                    Ok(::std::sync::Arc::new(instance) as $crate::core::registry::SharedComponent)
                },
            }
        }
    };
}

pub(crate) use register_component;

#[cfg(test)]
mod tests {
    use super::*;

    struct Leaf {
        value: u32,
    }

    struct Branch {
        leaf: Arc<Leaf>,
    }

    struct Loop;

    struct Slow {
        leaf: Arc<Leaf>,
    }

    impl Leaf {
        fn from_locator(_locator: &ServiceLocator) -> AppResult<Self> {
            Ok(Self { value: 7 })
        }
    }

    impl Branch {
        fn from_locator(locator: &ServiceLocator) -> AppResult<Self> {
            Ok(Self { leaf: locator.get::<Leaf>()? })
        }
    }

    impl Loop {
        fn from_locator(locator: &ServiceLocator) -> AppResult<Self> {
            locator.get::<Loop>()?;
            Ok(Loop)
        }
    }

    register_component!(Repository, "test_leaf", Leaf, Leaf::from_locator);
    register_component!(Service, "test_branch", Branch, Branch::from_locator);
    impl Slow {
        fn from_locator(locator: &ServiceLocator) -> AppResult<Self> {
            thread::sleep(std::time::Duration::from_millis(50));
            Ok(Self { leaf: locator.get::<Leaf>()? })
        }
    }

    register_component!(Service, "test_loop", Loop, Loop::from_locator);
    register_component!(Service, "test_slow", Slow, Slow::from_locator);

    #[test]
    fn test_resolve_by_name_is_deterministic() {
        let locator = ServiceLocator::new();

        let first = locator.resolve_as::<Branch>("test_branch").unwrap();
        let second = locator.resolve_as::<Branch>("test_branch").unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.leaf.value, 7);
    }

    #[test]
    fn test_dependencies_share_instances() {
        let locator = ServiceLocator::new();

        let branch = locator.get::<Branch>().unwrap();
        let leaf = locator.get::<Leaf>().unwrap();

        assert!(Arc::ptr_eq(&branch.leaf, &leaf));
    }

    #[test]
    fn test_separate_locators_do_not_share() {
        let a = ServiceLocator::new();
        let b = ServiceLocator::new();

        let leaf_a = a.get::<Leaf>().unwrap();
        let leaf_b = b.get::<Leaf>().unwrap();

        assert!(!Arc::ptr_eq(&leaf_a, &leaf_b));
    }

    #[test]
    fn test_set_overrides_constructor() {
        let locator = ServiceLocator::new();
        locator.set(Arc::new(Leaf { value: 42 }));

        let branch = locator.get::<Branch>().unwrap();
        assert_eq!(branch.leaf.value, 42);
    }

    #[test]
    fn test_unknown_name_is_configuration_error() {
        let locator = ServiceLocator::new();

        let result = locator.resolve("no_such_component");
        assert!(matches!(result, Err(AppError::ConfigurationError(_))));
    }

    #[test]
    fn test_unregistered_type_is_configuration_error() {
        struct Unregistered;
        let locator = ServiceLocator::new();

        let result = locator.get::<Unregistered>();
        assert!(matches!(result, Err(AppError::ConfigurationError(_))));
    }

    #[test]
    fn test_type_mismatch_is_reported() {
        let locator = ServiceLocator::new();

        let result = locator.resolve_as::<Branch>("test_leaf");
        assert!(matches!(result, Err(AppError::ConfigurationError(msg)) if msg.contains("Type mismatch")));
    }

    #[test]
    fn test_circular_dependency_is_detected() {
        let locator = ServiceLocator::new();

        let result = locator.get::<Loop>();
        assert!(matches!(result, Err(AppError::ConfigurationError(msg)) if msg.contains("Circular")));

        // 실패 후에도 초기화 중 표시가 남지 않아야 함
        let again = locator.get::<Loop>();
        assert!(matches!(again, Err(AppError::ConfigurationError(msg)) if msg.contains("Circular")));
    }

    #[test]
    fn test_concurrent_resolution_is_not_circular() {
        let locator = ServiceLocator::new();

        let (a, b) = thread::scope(|scope| {
            let a = scope.spawn(|| locator.get::<Slow>());
            let b = scope.spawn(|| locator.get::<Slow>());
            (a.join().unwrap(), b.join().unwrap())
        });

        let a = a.unwrap();
        let b = b.unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.leaf.value, 7);
        assert!(Arc::ptr_eq(&locator.get::<Slow>().unwrap(), &a));
    }

    #[test]
    fn test_extract_clean_type_name() {
        assert_eq!(
            ServiceLocator::extract_clean_type_name("art_gallery_backend::services::ArtworkService"),
            "ArtworkService"
        );
        assert_eq!(ServiceLocator::extract_clean_type_name("Plain"), "Plain");
    }

    #[test]
    fn test_registered_names_are_sorted() {
        let names = ServiceLocator::registered_names(ComponentKind::Service);
        let mut sorted = names.clone();
        sorted.sort_unstable();

        assert_eq!(names, sorted);
        assert!(names.contains(&"test_branch"));
    }
}
