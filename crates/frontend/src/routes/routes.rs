use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::domain::edicion::ui::{EdicionMenu, EditPage};
use crate::domain::historial::ui::HistorialList;
use crate::domain::inventario::ui::InventarioList;
use crate::domain::notas_venta::ui::NotasVentaList;
use crate::domain::procesos::stage;
use crate::domain::procesos::ui::ProcesoPage;
use crate::domain::usuarios::ui::UsuariosList;
use crate::system::pages::{HomePage, LoginPage, ProgramaPage};
use crate::system::session::guard::RequireSesion;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <LoginPage /> }>
                <Route path=path!("/") view=LoginPage />
                <Route path=path!("/login") view=LoginPage />
                <Route
                    path=path!("/home")
                    view=|| view! { <RequireSesion><HomePage /></RequireSesion> }
                />
                <Route
                    path=path!("/programa-produccion")
                    view=|| view! { <RequireSesion><ProgramaPage /></RequireSesion> }
                />
                <Route
                    path=path!("/inventario")
                    view=|| view! { <RequireSesion><InventarioList /></RequireSesion> }
                />
                <Route
                    path=path!("/gestion-usuarios")
                    view=|| view! { <RequireSesion><UsuariosList /></RequireSesion> }
                />
                <Route
                    path=path!("/procesos")
                    view=|| view! { <RequireSesion><NotasVentaList /></RequireSesion> }
                />
                <Route
                    path=path!("/historial")
                    view=|| view! { <RequireSesion><HistorialList /></RequireSesion> }
                />
                <Route
                    path=path!("/encolado")
                    view=|| view! { <RequireSesion><ProcesoPage stage=stage::ENCOLADO /></RequireSesion> }
                />
                <Route
                    path=path!("/trozado")
                    view=|| view! { <RequireSesion><ProcesoPage stage=stage::TROZADO /></RequireSesion> }
                />
                <Route
                    path=path!("/pegado")
                    view=|| view! { <RequireSesion><ProcesoPage stage=stage::PEGADO /></RequireSesion> }
                />
                <Route
                    path=path!("/troquelado")
                    view=|| view! { <RequireSesion><ProcesoPage stage=stage::TROQUELADO /></RequireSesion> }
                />
                <Route
                    path=path!("/multiple")
                    view=|| view! { <RequireSesion><ProcesoPage stage=stage::MULTIPLE /></RequireSesion> }
                />
                <Route
                    path=path!("/emplacado")
                    view=|| view! { <RequireSesion><ProcesoPage stage=stage::EMPLACADO /></RequireSesion> }
                />
                <Route
                    path=path!("/edicion")
                    view=|| view! { <RequireSesion><EdicionMenu /></RequireSesion> }
                />
                <Route
                    path=path!("/edicion/:proceso")
                    view=|| view! { <RequireSesion><EditPage /></RequireSesion> }
                />
            </Routes>
        </Router>
    }
}
