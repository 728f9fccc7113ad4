use crate::shared::config::AppConfig;
use crate::shared::icons;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Agent,
    Guest,
}

impl Role {
    /// Role implied by the current path; there is no session behind it.
    pub fn from_path(path: &str) -> Self {
        if path.starts_with("/admin") {
            Role::Admin
        } else if path.starts_with("/dca") {
            Role::Agent
        } else {
            Role::Guest
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Agent => "Collection Agent",
            Role::Guest => "Guest",
        }
    }

    /// Label and path of the link to the other role, if any
    pub fn switch_target(&self, default_dca_id: u32) -> Option<(&'static str, String)> {
        match self {
            Role::Admin => Some(("Switch to DCA", format!("/dca/{}", default_dca_id))),
            Role::Agent => Some(("Switch to Admin", "/admin".to_string())),
            Role::Guest => None,
        }
    }

    fn icon_name(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            _ => "agent",
        }
    }

    fn css_modifier(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Agent => "agent",
            Role::Guest => "guest",
        }
    }
}

#[component]
pub fn Navbar(title: &'static str) -> impl IntoView {
    let location = use_location();
    let role = Memo::new(move |_| Role::from_path(&location.pathname.get()));
    let default_dca_id = use_context::<AppConfig>()
        .unwrap_or_default()
        .agent
        .default_dca_id;

    view! {
        <nav class=move || format!("navbar navbar--{}", role.get().css_modifier())>
            <div class="navbar__brand">
                <div class="navbar__logo">
                    {move || icons::icon(role.get().icon_name())}
                </div>
                <div>
                    <div class="navbar__title">{title}</div>
                    <div class="navbar__subtitle">"SmartDCA"</div>
                </div>
            </div>
            <div class="navbar__actions">
                <span class="navbar__role">{move || role.get().label()}</span>
                {move || role.get().switch_target(default_dca_id).map(|(label, href)| view! {
                    <A href=href>
                        <span class="button button--ghost">{label}</span>
                    </A>
                })}
                <A href="/">
                    <span class="button button--ghost">"Logout"</span>
                </A>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_from_path() {
        assert_eq!(Role::from_path("/admin"), Role::Admin);
        assert_eq!(Role::from_path("/dca/1"), Role::Agent);
        assert_eq!(Role::from_path("/"), Role::Guest);
        assert_eq!(Role::from_path("/unknown"), Role::Guest);
    }

    #[test]
    fn test_switch_target_by_role() {
        assert_eq!(
            Role::Admin.switch_target(1),
            Some(("Switch to DCA", "/dca/1".to_string()))
        );
        assert_eq!(
            Role::Admin.switch_target(42),
            Some(("Switch to DCA", "/dca/42".to_string()))
        );
        assert_eq!(
            Role::Agent.switch_target(1),
            Some(("Switch to Admin", "/admin".to_string()))
        );
        assert_eq!(Role::Guest.switch_target(1), None);
    }
}
