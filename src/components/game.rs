use super::board::Board;
use crate::config::Config;
use crate::game::{self, ButtonState, GameAction, MouseState, Point, Sound, Status};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use yew::prelude::*;

fn request_animation_frame(f: &Closure<dyn FnMut(f64)>) {
    let requested = web_sys::window()
        .map(|window| window.request_animation_frame(f.as_ref().unchecked_ref()));
    if !matches!(requested, Some(Ok(_))) {
        log::error!("cannot request an animation frame");
    }
}

/// Calls `func` with the frame timestamp on every animation frame until the
/// returned flag is cleared.
fn raf_loop(mut func: impl FnMut(f64) + 'static) -> Rc<Cell<bool>> {
    let running = Rc::new(Cell::new(true));
    let f: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();

    let cloned_running = running.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
        if !cloned_running.get() {
            // Dropping the closure breaks the cycle and ends the loop.
            let _ = f.borrow_mut().take();
            return;
        }
        func(timestamp);
        if let Some(closure) = f.borrow().as_ref() {
            request_animation_frame(closure);
        }
    }) as Box<dyn FnMut(f64)>));

    if let Some(closure) = g.borrow().as_ref() {
        request_animation_frame(closure);
    }
    running
}

struct Audio {
    context: Rc<web_sys::AudioContext>,
    buf: web_sys::AudioBuffer,
}

impl Audio {
    fn play(&self) -> Result<(), JsValue> {
        // Browsers keep the context suspended until the first user gesture.
        let _ = self.context.resume()?;
        let node = self.context.create_buffer_source()?;
        node.set_buffer(Some(&self.buf));
        node.connect_with_audio_node(&self.context.destination())?;
        node.start()
    }
}

async fn resolve_promise<T: From<JsValue>>(promise: js_sys::Promise) -> Result<T, JsValue> {
    let value = wasm_bindgen_futures::JsFuture::from(promise).await?;
    Ok(value.into())
}

/// Loading progress of a lazily fetched resource, counting the plays asked
/// for while the fetch is in flight.
#[derive(Debug, PartialEq)]
enum LoadState<T> {
    Unloaded,
    Loading { plays: usize },
    Loaded(T),
}

#[derive(Debug, PartialEq)]
enum Request<T> {
    /// The caller starts the fetch.
    Fetch,
    /// A fetch is already running and will honour the request.
    Queued,
    Ready(T),
}

impl<T: Clone> LoadState<T> {
    fn request(&mut self, play: bool) -> Request<T> {
        match self {
            LoadState::Loaded(value) => Request::Ready(value.clone()),
            LoadState::Loading { plays } => {
                *plays += play as usize;
                Request::Queued
            }
            LoadState::Unloaded => {
                *self = LoadState::Loading {
                    plays: play as usize,
                };
                Request::Fetch
            }
        }
    }

    /// Stores the fetched value and returns how many plays are owed.
    fn loaded(&mut self, value: T) -> usize {
        let plays = match self {
            LoadState::Loading { plays } => *plays,
            _ => 0,
        };
        *self = LoadState::Loaded(value);
        plays
    }

    fn failed(&mut self) {
        *self = LoadState::Unloaded;
    }
}

struct LazyAudio {
    context: Rc<web_sys::AudioContext>,
    src: &'static str,
    state: RefCell<LoadState<Rc<Audio>>>,
}

impl LazyAudio {
    fn new(src: &'static str, context: Rc<web_sys::AudioContext>) -> Self {
        LazyAudio {
            context,
            src,
            state: RefCell::new(LoadState::Unloaded),
        }
    }

    async fn fetch(&self) -> Result<Rc<Audio>, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let res: web_sys::Response = resolve_promise(window.fetch_with_str(self.src)).await?;
        let array_buffer: js_sys::ArrayBuffer = resolve_promise(res.array_buffer()?).await?;
        let buf: web_sys::AudioBuffer =
            resolve_promise(self.context.decode_audio_data(&array_buffer)?).await?;

        Ok(Rc::new(Audio {
            context: self.context.clone(),
            buf,
        }))
    }

    /// Loads the buffer once and plays it if `play` is set. Plays requested
    /// while the buffer is still loading run when it arrives.
    async fn request(&self, play: bool) -> Result<(), JsValue> {
        let request = self.state.borrow_mut().request(play);
        match request {
            Request::Ready(audio) if play => audio.play(),
            Request::Ready(_) | Request::Queued => Ok(()),
            Request::Fetch => match self.fetch().await {
                Ok(audio) => {
                    let plays = self.state.borrow_mut().loaded(audio.clone());
                    for _ in 0..plays {
                        audio.play()?;
                    }
                    Ok(())
                }
                Err(err) => {
                    self.state.borrow_mut().failed();
                    Err(err)
                }
            },
        }
    }
}

/// One lazily loaded buffer per cue.
struct Sounds {
    correct_guess: LazyAudio,
    incorrect_guess: LazyAudio,
    new_game: LazyAudio,
}

impl Sounds {
    fn new() -> Option<Self> {
        let context = match web_sys::AudioContext::new() {
            Ok(context) => Rc::new(context),
            Err(_) => {
                log::warn!("audio is unavailable, playing without sound");
                return None;
            }
        };
        Some(Sounds {
            correct_guess: LazyAudio::new(Sound::CorrectGuess.src(), context.clone()),
            incorrect_guess: LazyAudio::new(Sound::IncorrectGuess.src(), context.clone()),
            new_game: LazyAudio::new(Sound::NewGame.src(), context),
        })
    }

    fn get(&self, sound: Sound) -> &LazyAudio {
        match sound {
            Sound::CorrectGuess => &self.correct_guess,
            Sound::IncorrectGuess => &self.incorrect_guess,
            Sound::NewGame => &self.new_game,
        }
    }
}

fn spawn_sound(sounds: &Rc<Option<Sounds>>, sound: Sound, play: bool) {
    let sounds = sounds.clone();
    wasm_bindgen_futures::spawn_local(async move {
        if let Some(sounds) = sounds.as_ref() {
            if let Err(err) = sounds.get(sound).request(play).await {
                log::warn!("cannot play {}: {:?}", sound.src(), err);
            }
        }
    });
}

/// Maps a client position onto the logical coordinates of the view box.
fn logical_position(
    svg: &NodeRef,
    event: &web_sys::MouseEvent,
    view_width: i32,
    view_height: i32,
) -> Option<Point> {
    let rect = svg.cast::<web_sys::Element>()?.get_bounding_client_rect();
    if rect.width() <= 0. || rect.height() <= 0. {
        return None;
    }
    let x = (event.client_x() as f64 - rect.left()) * view_width as f64 / rect.width();
    let y = (event.client_y() as f64 - rect.top()) * view_height as f64 / rect.height();
    Some(Point::new(x.floor() as i32, y.floor() as i32))
}

fn left_button(event: &web_sys::MouseEvent) -> ButtonState {
    if event.buttons() & 1 == 1 {
        ButtonState::Pressed
    } else {
        ButtonState::Released
    }
}

#[derive(Clone, PartialEq, Properties)]
pub struct Props {
    pub config: Config,
    pub width: f64,
    pub height: f64,
}

#[function_component(Game)]
pub fn game_component(props: &Props) -> Html {
    let Props {
        config,
        width,
        height,
    } = props.clone();
    let (view_width, view_height) = (config.window_width, config.window_height);

    let game = use_reducer(move || game::Game::new(config));
    let sounds = use_ref(Sounds::new);
    let svg = use_node_ref();

    let cloned_sounds = sounds.clone();
    use_effect_with_deps(
        move |_| {
            for sound in Sound::ALL {
                spawn_sound(&cloned_sounds, sound, false);
            }
            || ()
        },
        (),
    );

    let cloned_game = game.clone();
    use_effect_with_deps(
        move |_| {
            let running = raf_loop(move |timestamp| cloned_game.dispatch(GameAction::Tick(timestamp)));
            move || running.set(false)
        },
        (),
    );

    let on_mouse = move |game: UseReducerHandle<game::Game>, svg: NodeRef| {
        Callback::from(move |event: web_sys::MouseEvent| {
            event.prevent_default();
            if let Some(position) = logical_position(&svg, &event, view_width, view_height) {
                game.dispatch(GameAction::Mouse(MouseState::new(
                    position,
                    left_button(&event),
                )));
            }
        })
    };
    let onmousemove = on_mouse(game.clone(), svg.clone());
    let onmousedown = on_mouse(game.clone(), svg.clone());
    let onmouseup = on_mouse(game.clone(), svg.clone());
    let cloned_game = game.clone();
    let onmouseleave = Callback::from(move |_: web_sys::MouseEvent| {
        cloned_game.dispatch(GameAction::MouseLeave)
    });

    for sound in game.sounds.take() {
        spawn_sound(&sounds, sound, true);
    }

    let content = match &game.status {
        Status::Playing(board) => html! {
            <Board board={board.clone()} />
        },
        Status::Halted(err) => html! {
            <text
                x={(view_width / 2).to_string()}
                y={(view_height / 2).to_string()}
                text-anchor="middle"
                class="text error">
                {err.to_string()}
            </text>
        },
    };

    html! {
        <svg
            width={width.to_string()}
            height={height.to_string()}
            viewBox={format!("0 0 {} {}", view_width, view_height)}
            class="screen game"
            ref={svg}
            onmousemove={onmousemove}
            onmousedown={onmousedown}
            onmouseup={onmouseup}
            onmouseleave={onmouseleave}>
            {content}
        </svg>
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_plays_during_load_wait_for_it() {
        let mut state = LoadState::Unloaded;
        assert_eq!(state.request(false), Request::Fetch);
        assert_eq!(state.request(true), Request::Queued);
        assert_eq!(state.request(true), Request::Queued);
        assert_eq!(state.loaded(7), 2);
        assert_eq!(state.request(true), Request::Ready(7));
    }

    #[test]
    fn test_failed_load_is_retried() {
        let mut state = LoadState::Unloaded;
        assert_eq!(state.request(true), Request::Fetch);
        state.failed();
        assert_eq!(state.request(true), Request::Fetch);
        assert_eq!(state.loaded(3), 1);
    }
}
