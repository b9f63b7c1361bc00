// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::state::SessionState;

/// Pestaña activa del panel del lojista
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DashboardTab {
    Products,
    Orders,
    Customize,
}

/// Vista actual. No hay router: el render despacha sobre este enum.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Landing,
    Login,
    Register,
    RegisterStore,
    Dashboard(DashboardTab),
}

/// Estado global de la aplicación
#[derive(Clone)]
pub struct AppState {
    pub session: SessionState,
    pub route: Rc<RefCell<Route>>,

    // Reactivity: callbacks para notificar cambios (Rc para poder compartir)
    pub change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl AppState {
    /// Crear nuevo estado de aplicación
    pub fn new() -> Self {
        Self {
            session: SessionState::new(),
            route: Rc::new(RefCell::new(Route::Landing)),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn current_route(&self) -> Route {
        *self.route.borrow()
    }

    /// Cambiar de vista y notificar para re-render
    pub fn navigate(&self, route: Route) {
        *self.route.borrow_mut() = route;
        self.notify_subscribers();
    }

    /// Suscribirse a cambios de estado crítico
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Notificar a todos los subscribers de cambios
    pub fn notify_subscribers(&self) {
        for callback in self.change_subscribers.borrow().iter() {
            callback();
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
