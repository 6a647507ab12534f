use contracts::domain::a001_sales_order::SalesOrder;
use contracts::domain::a002_fabric_order::FabricOrder;
use contracts::domain::a003_development::Development;
use contracts::snapshot::ProductionSnapshot;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashMap;
use web_sys::window;

/// The five top-level views. The active one is mirrored into the URL
/// query string so a reload lands on the same tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveTab {
    Dashboard,
    SalesOrders,
    FabricOrders,
    Developments,
    PrintSheets,
}

impl ActiveTab {
    pub const ALL: [ActiveTab; 5] = [
        ActiveTab::Dashboard,
        ActiveTab::SalesOrders,
        ActiveTab::FabricOrders,
        ActiveTab::Developments,
        ActiveTab::PrintSheets,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ActiveTab::Dashboard => "dashboard",
            ActiveTab::SalesOrders => "sales",
            ActiveTab::FabricOrders => "fabric",
            ActiveTab::Developments => "developments",
            ActiveTab::PrintSheets => "print",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ActiveTab::Dashboard => "Dashboard",
            ActiveTab::SalesOrders => "Sales Orders",
            ActiveTab::FabricOrders => "Fabric Orders",
            ActiveTab::Developments => "Developments",
            ActiveTab::PrintSheets => "Print Sheets",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            ActiveTab::Dashboard => "dashboard",
            ActiveTab::SalesOrders => "sales",
            ActiveTab::FabricOrders => "fabric",
            ActiveTab::Developments => "developments",
            ActiveTab::PrintSheets => "print",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.key() == key)
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active_tab: RwSignal<ActiveTab>,
    /// The whole session dataset, replaced wholesale on every fetch.
    pub snapshot: RwSignal<Option<ProductionSnapshot>>,
    pub loading: RwSignal<bool>,
    pub load_error: RwSignal<Option<String>>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active_tab: RwSignal::new(ActiveTab::Dashboard),
            snapshot: RwSignal::new(None),
            loading: RwSignal::new(false),
            load_error: RwSignal::new(None),
        }
    }

    pub fn sales(&self) -> Vec<SalesOrder> {
        self.snapshot
            .with(|s| s.as_ref().map(|s| s.sales_po.clone()).unwrap_or_default())
    }

    pub fn fabric(&self) -> Vec<FabricOrder> {
        self.snapshot
            .with(|s| s.as_ref().map(|s| s.fabric_po.clone()).unwrap_or_default())
    }

    pub fn developments(&self) -> Vec<Development> {
        self.snapshot.with(|s| {
            s.as_ref()
                .map(|s| s.insert_pattern.clone())
                .unwrap_or_default()
        })
    }

    /// Fetch all three collections. A transport failure is terminal for
    /// the session until the user refreshes.
    pub fn load_snapshot(&self) {
        let this = *self;
        this.loading.set(true);
        this.load_error.set(None);
        spawn_local(async move {
            match crate::shared::data::fetch_snapshot().await {
                Ok(snapshot) => {
                    log::info!(
                        "Snapshot loaded: {} sales, {} fabric, {} developments",
                        snapshot.sales_po.len(),
                        snapshot.fabric_po.len(),
                        snapshot.insert_pattern.len()
                    );
                    this.snapshot.set(Some(snapshot));
                    this.loading.set(false);
                }
                Err(e) => {
                    log::error!("Snapshot fetch failed: {}", e);
                    this.load_error.set(Some(e));
                    this.loading.set(false);
                }
            }
        });
    }

    pub fn activate_tab(&self, tab: ActiveTab) {
        self.active_tab.set(tab);
    }

    /// Restore the active tab from the URL on startup and mirror tab
    /// changes back into the query string via replaceState.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(tab) = params.get("active").and_then(|k| ActiveTab::from_key(k)) {
            self.active_tab.set(tab);
        }

        let this = *self;
        Effect::new(move |_| {
            let active_key = this.active_tab.get().key();
            let query_string = serde_qs::to_string(&HashMap::from([(
                "active".to_string(),
                active_key.to_string(),
            )]))
            .unwrap_or_default();

            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not provided")
}
