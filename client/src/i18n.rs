//! Locale selection and shell chrome translations.
//!
//! Messages are a static table; lookup walks active locale, then the
//! variant's fallback locale, then returns the key unchanged.

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

use leptos::prelude::*;

use crate::config::AppProfile;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    EnUs,
    ZhCn,
}

impl Locale {
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::EnUs => "en_us",
            Self::ZhCn => "zh_cn",
        }
    }

    /// `lang` attribute value for the document.
    #[must_use]
    pub const fn html_lang(self) -> &'static str {
        match self {
            Self::EnUs => "en",
            Self::ZhCn => "zh-CN",
        }
    }

    /// The other locale, for the navbar toggle.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::EnUs => Self::ZhCn,
            Self::ZhCn => Self::EnUs,
        }
    }
}

/// Active and fallback locale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct I18n {
    pub locale: Locale,
    pub fallback: Locale,
}

impl I18n {
    #[must_use]
    pub const fn new(locale: Locale, fallback: Locale) -> Self {
        Self { locale, fallback }
    }

    #[must_use]
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        let found: Option<&'a str> = message(self.locale, key).or_else(|| message(self.fallback, key));
        found.unwrap_or(key)
    }
}

/// Translator bound to the locale and profile contexts. Reading it inside a
/// reactive closure re-renders on locale changes.
pub fn use_translate() -> impl Fn(&'static str) -> &'static str + Copy + Send + Sync + 'static {
    let locale = expect_context::<RwSignal<Locale>>();
    let fallback = expect_context::<AppProfile>().fallback_locale();
    move |key| I18n::new(locale.get(), fallback).t(key)
}

fn message(locale: Locale, key: &str) -> Option<&'static str> {
    let text = match (locale, key) {
        (Locale::EnUs, "nav.home") => "Home",
        (Locale::EnUs, "nav.browse") => "Browse",
        (Locale::EnUs, "nav.query") => "Query",
        (Locale::EnUs, "nav.about") => "About",
        (Locale::EnUs, "nav.superadmin") => "Administration",
        (Locale::EnUs, "nav.login") => "Sign in",
        (Locale::EnUs, "nav.logout") => "Sign out",
        (Locale::EnUs, "nav.language") => "中文",
        (Locale::EnUs, "auth.signed_in_as") => "Signed in as",
        (Locale::EnUs, "auth.admin") => "Administrator",
        (Locale::EnUs, "login.title") => "Sign in with passkey",
        (Locale::EnUs, "login.passkey") => "Passkey",
        (Locale::EnUs, "login.submit") => "Sign in",
        (Locale::EnUs, "login.empty") => "Enter a passkey first.",
        (Locale::EnUs, "login.busy") => "Signing in...",
        (Locale::EnUs, "login.failed") => "Sign-in failed",
        (Locale::EnUs, "superadmin.checking") => "Checking permissions...",
        (Locale::EnUs, "superadmin.allowed") => "You may manage passkeys.",
        (Locale::EnUs, "superadmin.denied") => "Only super administrators can access this page.",
        (Locale::EnUs, "home.intro") => "Explore structures and sources of marine natural products.",
        (Locale::EnUs, "browse.intro") => "Browse compound records by type and source.",
        (Locale::EnUs, "query.intro") => "Search by name, SMILES, similarity or substructure.",
        (Locale::EnUs, "about.intro") => "About this library.",
        (Locale::EnUs, "not_found.title") => "Page not found",
        (Locale::EnUs, "not_found.back") => "Back to home",

        (Locale::ZhCn, "nav.home") => "首页",
        (Locale::ZhCn, "nav.browse") => "浏览",
        (Locale::ZhCn, "nav.query") => "查询",
        (Locale::ZhCn, "nav.about") => "关于",
        (Locale::ZhCn, "nav.superadmin") => "管理",
        (Locale::ZhCn, "nav.login") => "登录",
        (Locale::ZhCn, "nav.logout") => "退出登录",
        (Locale::ZhCn, "nav.language") => "English",
        (Locale::ZhCn, "auth.signed_in_as") => "当前用户",
        (Locale::ZhCn, "auth.admin") => "超级管理员",
        (Locale::ZhCn, "login.title") => "使用 passkey 登录",
        (Locale::ZhCn, "login.submit") => "登录",
        (Locale::ZhCn, "login.empty") => "请输入 passkey。",
        (Locale::ZhCn, "login.failed") => "登录失败",
        (Locale::ZhCn, "superadmin.checking") => "正在验证权限...",
        (Locale::ZhCn, "superadmin.allowed") => "您可以管理 passkey。",
        (Locale::ZhCn, "superadmin.denied") => "只有超级管理员才能访问此功能",
        (Locale::ZhCn, "not_found.title") => "页面不存在",
        (Locale::ZhCn, "not_found.back") => "返回首页",
        _ => return None,
    };
    Some(text)
}
