use contracts::domain::a001_product::ProductRecord;
use contracts::shared::tabs::TabDescriptor;

use crate::domain::a001_product::ui::gallery::ProductGalleryRenderer;
use crate::domain::a002_lead::ui::form::LeadCaptureForm;
use crate::layout::anchor_scroll::AnchorScroller;
use crate::layout::footer::PageYearStamper;
use crate::layout::navbar::NavigationController;
use crate::layout::tabs::TabController;
use crate::shared::config::SiteConfig;
use crate::shared::dom::Dom;
use crate::shared::storage::KeyValueStore;

/// Every behavior of a page, mounted from one [`SiteConfig`].
///
/// Each controller degrades to a no-op when its elements are missing, so
/// the same configuration serves every page of the site.
pub struct App<D: Dom, S: KeyValueStore> {
    dom: D,
    navigation: NavigationController<D>,
    anchors: AnchorScroller<D>,
    tabs: Vec<TabController<D>>,
    lead_form: LeadCaptureForm<D, S>,
}

impl<D: Dom, S: KeyValueStore> App<D, S> {
    pub fn mount(dom: D, storage: S, config: &SiteConfig) -> Self {
        PageYearStamper::new(dom.clone(), config.footer.year_element_id.clone()).initialize();

        let mut navigation = NavigationController::new(dom.clone(), config.navigation.clone());
        navigation.initialize();

        // Tab panels first: galleries may render into them.
        let tabs = config
            .tabs
            .iter()
            .map(|group| {
                let mut tabs = TabController::new(
                    dom.clone(),
                    group.container_id.clone(),
                    group.items.clone(),
                );
                tabs.initialize();
                tabs
            })
            .collect();

        for gallery in &config.galleries {
            ProductGalleryRenderer::new(dom.clone(), gallery.container_id.clone())
                .render(&gallery.products);
        }

        let mut lead_form = LeadCaptureForm::new(dom.clone(), storage, &config.lead_form);
        lead_form.initialize(&config.lead_form.settings);

        // After tabs and form so that generated anchors are wired too.
        let mut anchors = AnchorScroller::new(dom.clone(), config.navigation.navbar_id.clone());
        anchors.initialize();

        log::info!("Site behaviors mounted on {}", dom.location_path());
        Self {
            dom,
            navigation,
            anchors,
            tabs,
            lead_form,
        }
    }

    /// Mount an extra tab group defined by the page.
    pub fn add_tabs(&mut self, container_id: &str, items: Vec<TabDescriptor>) {
        let mut tabs = TabController::new(self.dom.clone(), container_id, items);
        tabs.initialize();
        self.tabs.push(tabs);
    }

    pub fn render_products(&self, container_id: &str, products: &[ProductRecord]) {
        ProductGalleryRenderer::new(self.dom.clone(), container_id).render(products);
    }

    pub fn navigation(&self) -> &NavigationController<D> {
        &self.navigation
    }

    pub fn tabs(&self) -> &[TabController<D>] {
        &self.tabs
    }

    pub fn lead_form(&self) -> &LeadCaptureForm<D, S> {
        &self.lead_form
    }

    /// Release every listener of every controller.
    pub fn dispose(&mut self) {
        self.navigation.dispose();
        self.anchors.dispose();
        for tabs in &mut self.tabs {
            tabs.dispose();
        }
        self.lead_form.dispose();
    }
}
