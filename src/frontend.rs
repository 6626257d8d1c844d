use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use gloo_timers::future::sleep;
use serde_json::json;
use wasm_bindgen::closure::{Closure, WasmClosure};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    window, EventTarget, HtmlInputElement, HtmlTextAreaElement, KeyboardEvent, MouseEvent,
};
use yew::prelude::*;

use crate::browser::{
    applied_theme, apply_theme, capture_geometry, document, scroll_to_section, scroll_y,
    FetchTransport, LocalStorage, RevealObserver,
};
use crate::config::{ScrollThresholds, SiteConfig};
use crate::contact::{
    error_for, run_submission, validate, ContactFields, Field, FieldError, SubmissionEvent,
    SubmitState, ERROR_BORDER,
};
use crate::content::{
    Project, ABOUT_PARAGRAPHS, ABOUT_PHOTO, CONTACT_EMAIL, FILTER_BUTTONS, HERO_AVATAR, NAV_LINKS,
    OWNER_NAME, OWNER_ROLE, PROJECTS, SKILL_CARDS, STATS,
};
use crate::debounce::{Debouncer, TimerSlot};
use crate::effects::{CursorState, ImageSlot, Typewriter, FALLBACK_TILE_STYLE};
use crate::filter::FilterSelection;
use crate::logging::{log_event, LogLevel};
use crate::nav::{anchor_target, MobileMenu};
use crate::notice::{play_banner, BannerSlot, BannerStep, BannerTimings, Notice};
use crate::sync::{
    bar_style, is_link_active, parse_bar_width, section_reveal_style, synchronize,
    GeometrySnapshot, HeaderChrome, ScrollUiState,
};
use crate::theme::{resolve_theme, toggle_theme, Theme};

#[derive(Clone, PartialEq)]
struct ScrollModel {
    state: ScrollUiState,
    thresholds: ScrollThresholds,
}

enum ScrollAction {
    Sync {
        snapshot: GeometrySnapshot,
        theme: Theme,
    },
    Reveal(Vec<String>),
    Retheme { scroll_y: f64, theme: Theme },
}

impl Reducible for ScrollModel {
    type Action = ScrollAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let state = match action {
            ScrollAction::Sync { snapshot, theme } => {
                synchronize(&self.state, &snapshot, theme, &self.thresholds)
            }
            ScrollAction::Reveal(keys) => {
                let mut state = self.state.clone();
                if state.revealed.reveal(&keys) == 0 {
                    return self;
                }
                state
            }
            ScrollAction::Retheme { scroll_y, theme } => {
                let mut state = self.state.clone();
                state.chrome =
                    HeaderChrome::evaluate(scroll_y, self.thresholds.header_scrolled_after, theme);
                state
            }
        };

        if state == self.state {
            return self;
        }

        if state.revealed.len() != self.state.revealed.len() {
            log_event(
                LogLevel::Debug,
                "reveal_progress",
                json!({ "revealed": state.revealed.len(), "bars_filled": state.bars_filled }),
            );
        }

        Rc::new(Self {
            state,
            thresholds: self.thresholds,
        })
    }
}

#[derive(Clone, Default, PartialEq)]
struct BannerModel(BannerSlot);

enum BannerAction {
    Show(Notice),
    Step(u64, BannerStep),
}

impl Reducible for BannerModel {
    type Action = BannerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut slot = self.0.clone();
        match action {
            BannerAction::Show(notice) => {
                slot.show(notice);
            }
            BannerAction::Step(id, BannerStep::Advance(phase)) => slot.advance(id, phase),
            BannerAction::Step(id, BannerStep::Dismiss) => slot.dismiss(id),
        }
        Rc::new(Self(slot))
    }
}

enum MenuAction {
    Toggle,
    Close,
    Key(String),
}

impl Reducible for MobileMenu {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            MenuAction::Toggle => self.toggled(),
            MenuAction::Close => self.closed(),
            MenuAction::Key(key) => self.on_key(&key),
        };

        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

enum CursorAction {
    Move(i32, i32),
    Enter,
    Leave,
}

impl Reducible for CursorState {
    type Action = CursorAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(match action {
            CursorAction::Move(x, y) => self.moved(x, y),
            CursorAction::Enter => CursorState {
                inside: true,
                ..*self
            },
            CursorAction::Leave => CursorState {
                inside: false,
                ..*self
            },
        })
    }
}

struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: js_sys::Function,
}

impl Listener {
    fn attach<E>(target: EventTarget, event: &'static str, callback: Closure<E>) -> Self
    where
        E: ?Sized + WasmClosure,
    {
        let callback: js_sys::Function = callback.into_js_value().unchecked_into();
        let _ = target.add_event_listener_with_callback(event, &callback);
        Self {
            target,
            event,
            callback,
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, &self.callback);
    }
}

fn sync_action() -> ScrollAction {
    ScrollAction::Sync {
        snapshot: capture_geometry(),
        theme: applied_theme(),
    }
}

fn reveal_classes(base: &'static str, scroll: &ScrollUiState, key: &str) -> Classes {
    classes!(
        base,
        scroll
            .revealed
            .is_revealed(key)
            .then_some("animate-on-scroll animated")
    )
}

#[derive(Properties, PartialEq)]
struct PhotoFrameProps {
    slot: ImageSlot,
    class: &'static str,
    src: AttrValue,
    alt: AttrValue,
}

#[function_component(PhotoFrame)]
fn photo_frame(props: &PhotoFrameProps) -> Html {
    let failed = use_state(|| false);

    let onerror = {
        let failed = failed.clone();
        Callback::from(move |_: Event| failed.set(true))
    };

    if *failed {
        return html! {
            <div class={props.class} style={FALLBACK_TILE_STYLE}>
                <i class={props.slot.fallback_icon()} style="font-size: 4rem; color: white;"></i>
            </div>
        };
    }

    html! {
        <div class={props.class}>
            <img src={props.src.clone()} alt={props.alt.clone()} onerror={onerror} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct PortfolioCardProps {
    index: usize,
    title: AttrValue,
    category: AttrValue,
    description: AttrValue,
    image: AttrValue,
    live_url: AttrValue,
    source_url: AttrValue,
    style: AttrValue,
    class: Classes,
}

#[function_component(PortfolioCard)]
fn portfolio_card(props: &PortfolioCardProps) -> Html {
    let hovered = use_state(|| false);

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };
    let on_link_click = Callback::from(|event: MouseEvent| event.stop_propagation());
    let overlay_style = if *hovered { "opacity: 1;" } else { "opacity: 0;" };

    html! {
        <div
            class={props.class.clone()}
            style={props.style.clone()}
            data-category={props.category.clone()}
            data-reveal={format!("portfolio-{}", props.index)}
            onmouseenter={onmouseenter}
            onmouseleave={onmouseleave}
        >
            <div class="portfolio-item__image">
                <img src={props.image.clone()} alt={props.title.clone()} loading="lazy" />
                <div class="portfolio-item__overlay" style={overlay_style}>
                    <a
                        class="portfolio-link"
                        href={props.live_url.clone()}
                        target="_blank"
                        rel="noopener noreferrer"
                        onclick={on_link_click.clone()}
                    >
                        <i class="fas fa-external-link-alt"></i>
                    </a>
                    <a
                        class="portfolio-link"
                        href={props.source_url.clone()}
                        target="_blank"
                        rel="noopener noreferrer"
                        onclick={on_link_click}
                    >
                        <i class="fab fa-github"></i>
                    </a>
                </div>
            </div>
            <div class="portfolio-item__content">
                <h3>{props.title.clone()}</h3>
                <p>{props.description.clone()}</p>
            </div>
        </div>
    }
}

fn field_input(
    field: Field,
    label: &'static str,
    fields: &UseStateHandle<ContactFields>,
    errors: &[FieldError],
) -> Html {
    let error = error_for(errors, field);
    let style = error.map(|_| ERROR_BORDER);
    let value = fields.get(field).to_string();

    let control = if field == Field::Message {
        let fields = fields.clone();
        let oninput = Callback::from(move |event: InputEvent| {
            let value = event.target_unchecked_into::<HtmlTextAreaElement>().value();
            let mut next = (*fields).clone();
            next.set(field, value);
            fields.set(next);
        });
        html! {
            <textarea
                id={field.as_str()}
                name={field.as_str()}
                rows="5"
                {style}
                {value}
                {oninput}
            ></textarea>
        }
    } else {
        let fields = fields.clone();
        let oninput = Callback::from(move |event: InputEvent| {
            let value = event.target_unchecked_into::<HtmlInputElement>().value();
            let mut next = (*fields).clone();
            next.set(field, value);
            fields.set(next);
        });
        let kind = if field == Field::Email { "email" } else { "text" };
        html! {
            <input
                id={field.as_str()}
                name={field.as_str()}
                type={kind}
                {style}
                {value}
                {oninput}
            />
        }
    };

    html! {
        <div class="form-group">
            <label for={field.as_str()}>{label}</label>
            {control}
            if let Some(message) = error {
                <div
                    class="error-message"
                    style="color: #ef4444; font-size: 0.875rem; margin-top: 0.25rem;"
                >
                    {message}
                </div>
            }
        </div>
    }
}

fn project_props(
    index: usize,
    project: &Project,
    filter: &FilterSelection,
    class: Classes,
) -> PortfolioCardProps {
    PortfolioCardProps {
        index,
        title: AttrValue::from(project.title),
        category: AttrValue::from(project.category),
        description: AttrValue::from(project.description),
        image: AttrValue::from(project.image),
        live_url: AttrValue::from(project.live_url),
        source_url: AttrValue::from(project.source_url),
        style: AttrValue::from(filter.item_style(project.category)),
        class,
    }
}

#[derive(Properties, PartialEq)]
struct AppProps {
    config: Rc<SiteConfig>,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let config = props.config.clone();
    let theme = use_state(|| resolve_theme(&LocalStorage));
    let scroll = {
        let initial_theme = *theme;
        let thresholds = config.thresholds;
        use_reducer(move || ScrollModel {
            state: ScrollUiState::new(initial_theme),
            thresholds,
        })
    };
    let banner = use_reducer(BannerModel::default);
    let menu = use_reducer(MobileMenu::default);
    let cursor = use_reducer(CursorState::default);
    let filter = use_state(FilterSelection::default);
    let fields = use_state(ContactFields::default);
    let errors = use_state(Vec::<FieldError>::new);
    let submit = use_state(SubmitState::default);
    let typed = use_state(|| Typewriter::full(OWNER_NAME));
    let faded_in = use_state(|| false);

    {
        let current = *theme;
        let config = config.clone();
        let scroll = scroll.dispatcher();
        let menu = menu.dispatcher();
        let cursor = cursor.dispatcher();
        let typed = typed.clone();
        let faded_in = faded_in.clone();
        use_effect_with((), move |_| {
            apply_theme(current);
            log_event(
                LogLevel::Info,
                "app_mounted",
                json!({
                    "theme": current.as_str(),
                    "endpoint_host": config.form_endpoint.host_str(),
                }),
            );

            {
                let faded_in = faded_in.clone();
                let delay = config.fade_in.as_millis() as u32;
                Timeout::new(delay, move || faded_in.set(true)).forget();
            }

            {
                let start = config.typing_start;
                let step = config.typing_step;
                spawn_local(async move {
                    sleep(start).await;
                    let mut typewriter = Typewriter::new(OWNER_NAME);
                    while typewriter.tick() {
                        typed.set(typewriter.clone());
                        sleep(step).await;
                    }
                });
            }

            scroll.dispatch(sync_action());

            let mut listeners = Vec::new();

            if let Some(win) = window() {
                let debouncer = Rc::new(RefCell::new(Debouncer::<()>::default()));
                let pending = Rc::new(RefCell::new(TimerSlot::<Timeout>::default()));
                let delay = config.scroll_debounce.as_millis() as u32;

                for event in ["scroll", "resize"] {
                    let debouncer = debouncer.clone();
                    let pending = pending.clone();
                    let scroll = scroll.clone();
                    let callback = Closure::<dyn FnMut()>::new(move || {
                        let ticket = debouncer.borrow_mut().push(());
                        let debouncer = debouncer.clone();
                        let scroll = scroll.clone();
                        let timeout = Timeout::new(delay, move || {
                            if debouncer.borrow_mut().redeem(ticket).is_some() {
                                scroll.dispatch(sync_action());
                            }
                        });
                        pending.borrow_mut().arm(timeout);
                    });
                    listeners.push(Listener::attach(win.clone().into(), event, callback));
                }
            }

            if let Some(doc) = document() {
                let on_key = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
                    menu.dispatch(MenuAction::Key(event.key()));
                });
                listeners.push(Listener::attach(doc.clone().into(), "keydown", on_key));

                let moved = cursor.clone();
                let on_move = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
                    moved.dispatch(CursorAction::Move(event.client_x(), event.client_y()));
                });
                listeners.push(Listener::attach(doc.clone().into(), "mousemove", on_move));

                let entered = cursor.clone();
                let on_enter =
                    Closure::<dyn FnMut()>::new(move || entered.dispatch(CursorAction::Enter));
                listeners.push(Listener::attach(doc.clone().into(), "mouseenter", on_enter));

                let on_leave =
                    Closure::<dyn FnMut()>::new(move || cursor.dispatch(CursorAction::Leave));
                listeners.push(Listener::attach(doc.into(), "mouseleave", on_leave));
            }

            let observer = RevealObserver::observe_page(move |keys| {
                scroll.dispatch(ScrollAction::Reveal(keys));
            });

            move || {
                drop(observer);
                drop(listeners);
            }
        });
    }

    {
        let banner_id = banner.0.current().map(|current| current.id);
        let dispatcher = banner.dispatcher();
        let timings = BannerTimings {
            enter: config.banner_enter,
            visible: config.banner_visible,
            exit: config.banner_exit,
        };
        use_effect_with(banner_id, move |banner_id| {
            if let Some(id) = *banner_id {
                spawn_local(play_banner(id, timings, sleep, move |id, step| {
                    dispatcher.dispatch(BannerAction::Step(id, step));
                }));
            }
            || ()
        });
    }

    let on_toggle_theme = {
        let theme = theme.clone();
        let scroll = scroll.dispatcher();
        Callback::from(move |_: MouseEvent| {
            let next = toggle_theme(*theme, &mut LocalStorage);
            apply_theme(next);
            theme.set(next);
            scroll.dispatch(ScrollAction::Retheme {
                scroll_y: scroll_y(),
                theme: next,
            });
            log_event(LogLevel::Info, "theme_changed", json!({ "theme": next.as_str() }));
        })
    };

    let on_toggle_menu = {
        let menu = menu.dispatcher();
        Callback::from(move |_: MouseEvent| menu.dispatch(MenuAction::Toggle))
    };

    let on_nav = |href: &'static str| {
        let menu = menu.dispatcher();
        Callback::from(move |event: MouseEvent| {
            menu.dispatch(MenuAction::Close);
            if let Some(id) = anchor_target(href) {
                event.prevent_default();
                scroll_to_section(id);
            }
        })
    };

    let on_filter = |value: &'static str| {
        let filter = filter.clone();
        Callback::from(move |_: MouseEvent| {
            let next = FilterSelection::new(value);
            log_event(
                LogLevel::Info,
                "filter_changed",
                json!({
                    "filter": next.as_str(),
                    "visible": next.visible_count(PROJECTS.iter().map(|project| project.category)),
                }),
            );
            filter.set(next);
        })
    };

    let onsubmit = {
        let fields = fields.clone();
        let errors = errors.clone();
        let submit = submit.clone();
        let banner = banner.dispatcher();
        let endpoint = config.form_endpoint.clone();
        let restore_after = config.submit_restore;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if submit.disabled() {
                return;
            }

            let found = validate(&fields);
            if !found.is_empty() {
                let failing: Vec<_> = found.iter().map(|error| error.field.as_str()).collect();
                log_event(
                    LogLevel::Info,
                    "contact_validation_failed",
                    json!({ "fields": failing }),
                );
                errors.set(found);
                return;
            }
            errors.set(Vec::new());

            submit.set(SubmitState::Pending);
            log_event(
                LogLevel::Info,
                "contact_submit_started",
                json!({ "endpoint_host": endpoint.host_str() }),
            );

            let payload = (*fields).clone();
            let endpoint = endpoint.clone();
            let fields = fields.clone();
            let submit = submit.clone();
            let banner = banner.clone();
            spawn_local(async move {
                let transport = FetchTransport;
                let result = run_submission(
                    &transport,
                    &endpoint,
                    &payload,
                    restore_after,
                    sleep,
                    |event| match event {
                        SubmissionEvent::Settled {
                            state,
                            notice,
                            reset_form,
                        } => {
                            submit.set(state);
                            if reset_form {
                                fields.set(ContactFields::default());
                            }
                            banner.dispatch(BannerAction::Show(notice));
                        }
                        SubmissionEvent::Restored => submit.set(SubmitState::Idle),
                    },
                )
                .await;

                match result {
                    Ok(()) => log_event(LogLevel::Info, "contact_submit_succeeded", json!({})),
                    Err(error) => log_event(
                        LogLevel::Info,
                        "contact_submit_failed",
                        json!({ "error": error.to_string() }),
                    ),
                }
            });
        })
    };

    let ui = &scroll.state;
    let active = ui.active_section.as_deref();
    let header_style = ui.chrome.inline_style();
    let hero_style = format!("transform: translateY({:.1}px);", ui.parallax);
    let page_style = if *faded_in {
        "opacity: 1; transition: opacity 0.5s ease-in-out;"
    } else {
        "opacity: 0; transition: opacity 0.5s ease-in-out;"
    };

    html! {
        <div class="page" style={page_style}>
            <header class={classes!("header", ui.chrome.class())} style={header_style}>
                <nav class="nav container">
                    <a href="#home" class="nav__logo" onclick={on_nav("#home")}>{OWNER_NAME}</a>
                    <ul id="nav-menu" class={menu.class("nav__menu")}>
                        { for NAV_LINKS.iter().map(|link| html! {
                            <li class="nav__item">
                                <a
                                    href={link.href}
                                    class={classes!(
                                        "nav__link",
                                        is_link_active(active, link.href).then_some("active")
                                    )}
                                    onclick={on_nav(link.href)}
                                >
                                    {link.label}
                                </a>
                            </li>
                        }) }
                    </ul>
                    <div class="nav__buttons">
                        <button
                            id="theme-toggle"
                            class="theme-toggle"
                            type="button"
                            aria-label={(*theme).toggle_label()}
                            onclick={on_toggle_theme}
                        >
                            <i class={(*theme).icon_class()}></i>
                        </button>
                        <button
                            id="nav-toggle"
                            class={menu.class("nav__toggle")}
                            type="button"
                            aria-label="Toggle navigation"
                            aria-expanded={menu.is_open().to_string()}
                            onclick={on_toggle_menu}
                        >
                            <span></span><span></span><span></span>
                        </button>
                    </div>
                </nav>
            </header>

            <main>
                <section id="home" class="hero" style={hero_style}>
                    <div class="hero__container container">
                        <div class="hero__content">
                            <h1 class="hero__title">
                                {"Hi, I'm "}
                                <span class="hero__title-name">{typed.visible()}</span>
                            </h1>
                            <p class="hero__subtitle">{OWNER_ROLE}</p>
                            <a
                                href="#contact"
                                class="btn btn--primary"
                                onclick={on_nav("#contact")}
                            >
                                {"Get in touch"}
                            </a>
                        </div>
                        <PhotoFrame
                            slot={ImageSlot::HeroAvatar}
                            class="hero__avatar"
                            src={HERO_AVATAR}
                            alt={OWNER_NAME}
                        />
                    </div>
                </section>

                <section
                    id="about"
                    class="about section"
                    data-reveal="section-about"
                    style={section_reveal_style(ui.revealed.is_revealed("section-about"))}
                >
                    <div class="container about__container">
                        <div
                            class={reveal_classes("about__image", ui, "about-image")}
                            data-reveal="about-image"
                        >
                            <PhotoFrame
                                slot={ImageSlot::AboutPhoto}
                                class="about__photo"
                                src={ABOUT_PHOTO}
                                alt={OWNER_NAME}
                            />
                        </div>
                        <div
                            class={reveal_classes("about__text", ui, "about-text")}
                            data-reveal="about-text"
                        >
                            <h2 class="section__title">{"About me"}</h2>
                            { for ABOUT_PARAGRAPHS.iter().map(|text| html! { <p>{*text}</p> }) }
                            <div class="about__stats">
                                { for STATS.iter().enumerate().map(|(index, stat)| {
                                    let key = format!("stat-{index}");
                                    html! {
                                        <div
                                            class={reveal_classes("stat", ui, &key)}
                                            data-reveal={key.clone()}
                                        >
                                            <span class="stat__number">{stat.value}</span>
                                            <span class="stat__label">{stat.label}</span>
                                        </div>
                                    }
                                }) }
                            </div>
                        </div>
                    </div>
                </section>

                <section
                    id="skills"
                    class="skills section"
                    data-reveal="section-skills"
                    style={section_reveal_style(ui.revealed.is_revealed("section-skills"))}
                >
                    <div class="container">
                        <h2 class="section__title">{"Skills"}</h2>
                        <div class="skills__grid">
                            { for SKILL_CARDS.iter().enumerate().map(|(index, card)| {
                                let key = format!("skill-card-{index}");
                                html! {
                                    <div
                                        class={reveal_classes("skill-card", ui, &key)}
                                        data-reveal={key.clone()}
                                    >
                                        <i class={card.icon}></i>
                                        <h3>{card.title}</h3>
                                        { for card.bars.iter().map(|bar| html! {
                                            <div class="skill">
                                                <span class="skill__name">{bar.name}</span>
                                                <div class="progress">
                                                    <div
                                                        class="progress-fill"
                                                        data-width={bar.width}
                                                        style={bar_style(
                                                            parse_bar_width(bar.width),
                                                            ui.bars_filled,
                                                        )}
                                                    ></div>
                                                </div>
                                            </div>
                                        }) }
                                    </div>
                                }
                            }) }
                        </div>
                    </div>
                </section>

                <section
                    id="portfolio"
                    class="portfolio section"
                    data-reveal="section-portfolio"
                    style={section_reveal_style(ui.revealed.is_revealed("section-portfolio"))}
                >
                    <div class="container">
                        <h2 class="section__title">{"Portfolio"}</h2>
                        <div class="portfolio__filters">
                            { for FILTER_BUTTONS.iter().map(|button| html! {
                                <button
                                    type="button"
                                    class={classes!(
                                        "filter-btn",
                                        filter.is_button_active(button.filter).then_some("active")
                                    )}
                                    data-filter={button.filter}
                                    onclick={on_filter(button.filter)}
                                >
                                    {button.label}
                                </button>
                            }) }
                        </div>
                        <div class="portfolio__grid">
                            { for PROJECTS.iter().enumerate().map(|(index, project)| {
                                let key = format!("portfolio-{index}");
                                let class = reveal_classes("portfolio-item", ui, &key);
                                let card = project_props(index, project, &filter, class);
                                html! { <PortfolioCard ..card /> }
                            }) }
                        </div>
                    </div>
                </section>

                <section
                    id="contact"
                    class="contact section"
                    data-reveal="section-contact"
                    style={section_reveal_style(ui.revealed.is_revealed("section-contact"))}
                >
                    <div class="container contact__container">
                        <div class="contact__info">
                            <h2 class="section__title">{"Contact"}</h2>
                            <p>{"Have a project in mind? Send a message or write to "}
                                <a href={format!("mailto:{CONTACT_EMAIL}")}>{CONTACT_EMAIL}</a>
                            </p>
                        </div>
                        <form id="contact-form" class="contact__form" novalidate={true} {onsubmit}>
                            { field_input(Field::Name, "Name", &fields, &errors) }
                            { field_input(Field::Email, "Email", &fields, &errors) }
                            { field_input(Field::Subject, "Subject", &fields, &errors) }
                            { field_input(Field::Message, "Message", &fields, &errors) }
                            <button
                                type="submit"
                                class="btn btn--primary"
                                disabled={submit.disabled()}
                                style={submit.style()}
                            >
                                {submit.label()}
                            </button>
                        </form>
                    </div>
                </section>
            </main>

            <footer class="footer">
                <p>{format!("© {OWNER_NAME}")}</p>
            </footer>

            if let Some(current) = banner.0.current() {
                <div class={current.class()} style={current.style()}>
                    {current.notice.message.clone()}
                </div>
            }
            <div class="custom-cursor" style={cursor.style()}></div>
        </div>
    }
}

pub fn run() {
    console_error_panic_hook::set_once();

    let root = document()
        .and_then(|d| d.get_element_by_id("app"))
        .expect("missing #app mount point");
    let config = SiteConfig::from_attributes(|name| root.get_attribute(&format!("data-{name}")));
    let _ = console_log::init_with_level(config.log_level.as_log_level());

    yew::Renderer::<App>::with_root_and_props(
        root,
        AppProps {
            config: Rc::new(config),
        },
    )
    .render();
}
