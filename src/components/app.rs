use super::game::Game;
use super::menu::Menu;
use crate::config;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use yew::prelude::*;

fn fit_with_aspect_ratio(
    width: f64,
    height: f64,
    aspect_width: f64,
    aspect_height: f64,
) -> (f64, f64) {
    if width * aspect_height > height * aspect_width {
        (height * aspect_width / aspect_height, height)
    } else {
        (width, width * aspect_height / aspect_width)
    }
}

fn window_size() -> Option<(f64, f64)> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some((width, height))
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Screen {
    Menu,
    Play,
}

enum ScreenAction {
    Start,
    Quit,
}

impl Reducible for Screen {
    type Action = ScreenAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match (*self, action) {
            (Screen::Menu, ScreenAction::Start) => Screen::Play,
            (Screen::Play, ScreenAction::Quit) => Screen::Menu,
            _ => return self,
        };
        log::info!("switching to {:?}", next);
        next.into()
    }
}

fn use_keyboard(screen: UseReducerHandle<Screen>) {
    use_effect_with_deps(
        move |_| {
            let listener = Closure::wrap(Box::new(move |event: web_sys::KeyboardEvent| {
                match event.key().as_str() {
                    "Enter" => screen.dispatch(ScreenAction::Start),
                    "Escape" => screen.dispatch(ScreenAction::Quit),
                    _ => {}
                }
            }) as Box<dyn FnMut(_)>);

            let window = web_sys::window();
            if let Some(window) = &window {
                if window
                    .add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref())
                    .is_err()
                {
                    log::warn!("cannot listen to the keyboard");
                }
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback(
                        "keydown",
                        listener.as_ref().unchecked_ref(),
                    );
                }
            }
        },
        (),
    );
}

#[function_component(App)]
pub fn app() -> Html {
    let config = use_state(config::load);
    let screen = use_reducer(|| Screen::Menu);
    use_keyboard(screen.clone());

    let config = match &*config {
        Ok(config) => config.clone(),
        Err(err) => {
            log::error!("{}", err);
            return html! {
                <div class="app">
                    <h1>{"Number Tiles"}</h1>
                    <p class="error">{err.to_string()}</p>
                </div>
            };
        }
    };

    let (view_width, view_height) = (config.window_width, config.window_height);
    let (width, height) = window_size().unwrap_or((view_width as f64, view_height as f64));
    let (width, height) = fit_with_aspect_ratio(
        width - 20.,
        height - 20.,
        view_width as f64,
        view_height as f64,
    );

    let cloned_screen = screen.clone();
    let onstart = Callback::from(move |_: ()| cloned_screen.dispatch(ScreenAction::Start));

    html! {
        <div class="app">
            {
                match *screen {
                    Screen::Menu => html! {
                        <Menu
                            view_width={view_width}
                            view_height={view_height}
                            width={width}
                            height={height}
                            onstart={onstart} />
                    },
                    Screen::Play => html! {
                        <Game config={config} width={width} height={height} />
                    },
                }
            }
        </div>
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_fit_with_aspect_ratio() {
        assert_eq!(fit_with_aspect_ratio(1600., 600., 800., 600.), (800., 600.));
        assert_eq!(fit_with_aspect_ratio(400., 900., 800., 600.), (400., 300.));
    }

    #[test]
    fn test_screen_transitions() {
        let screen = Rc::new(Screen::Menu);
        let screen = screen.reduce(ScreenAction::Quit);
        assert_eq!(*screen, Screen::Menu);
        let screen = screen.reduce(ScreenAction::Start);
        assert_eq!(*screen, Screen::Play);
        let screen = screen.reduce(ScreenAction::Start);
        assert_eq!(*screen, Screen::Play);
        let screen = screen.reduce(ScreenAction::Quit);
        assert_eq!(*screen, Screen::Menu);
    }
}
