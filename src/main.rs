use gloo::console;
use gloo::events::EventListener;
use serde::{Deserialize, Serialize};
use web_sys::{DragEvent, Element, HtmlImageElement, HtmlSelectElement, MouseEvent};
use yew::prelude::*;

use pintu_core::board::splitmix32;
use pintu_core::{
    compute_layout, image_by_slug, scatter_seed, transfer, Difficulty, DropOutcome, ImageEntry,
    PuzzleBoard, DIFFICULTIES, IMAGE_CATALOG, SCATTER_SEED,
};

const SELECTION_KEY: &str = "pintu.selection.v1";
const SELECTION_VERSION: u32 = 1;
const DRAG_FORMAT: &str = "text/plain";

#[derive(Clone, Serialize, Deserialize)]
struct SavedSelection {
    version: u32,
    slug: String,
    difficulty: Difficulty,
}

fn load_saved_selection() -> Option<SavedSelection> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    let raw = storage.get_item(SELECTION_KEY).ok()??;
    let saved: SavedSelection = serde_json::from_str(&raw).ok()?;
    if saved.version != SELECTION_VERSION {
        return None;
    }
    Some(saved)
}

fn save_selection(slug: &str, difficulty: Difficulty) {
    let saved = SavedSelection {
        version: SELECTION_VERSION,
        slug: slug.to_string(),
        difficulty,
    };
    let Ok(raw) = serde_json::to_string(&saved) else {
        return;
    };
    let Some(storage) = web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    else {
        return;
    };
    let _ = storage.set_item(SELECTION_KEY, &raw);
}

fn viewport_size() -> Option<(f32, f32)> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some((width as f32, height as f32))
}

fn event_to_frame_coords(event: &DragEvent, area_ref: &NodeRef) -> Option<(f32, f32)> {
    let area = area_ref.cast::<Element>()?;
    let rect = area.get_bounding_client_rect();
    if rect.width() <= 0.0 || rect.height() <= 0.0 {
        return None;
    }
    let x = event.client_x() as f64 - rect.left();
    let y = event.client_y() as f64 - rect.top();
    Some((x as f32, y as f32))
}

fn scatter_nonce(previous: u32) -> u32 {
    let now = js_sys::Date::now() as u32;
    splitmix32(now ^ previous.wrapping_add(0x9E37_79B9))
}

fn progress_label(placed: usize, total: usize) -> String {
    if total == 0 {
        return "--".to_string();
    }
    format!("{}/{}", placed, total)
}

fn difficulty_options(current: Difficulty) -> Html {
    DIFFICULTIES
        .iter()
        .map(|difficulty| {
            html! {
                <option value={difficulty.slug()} selected={*difficulty == current}>
                    { difficulty.label() }
                </option>
            }
        })
        .collect()
}

#[function_component(App)]
fn app() -> Html {
    let selected_slug = use_state(|| None::<String>);
    let difficulty = use_state(Difficulty::default);
    let image_size = use_state(|| None::<(u32, u32)>);
    let viewport = use_state(|| viewport_size().unwrap_or((0.0, 0.0)));
    let board = use_state(|| None::<PuzzleBoard>);
    let nonce_ref = use_mut_ref(|| 0u32);
    let area_ref = use_node_ref();

    let selected_slug_value = (*selected_slug).clone();
    let difficulty_value = *difficulty;
    let image_size_value = *image_size;
    let viewport_value = *viewport;

    {
        let selected_slug = selected_slug.clone();
        let difficulty = difficulty.clone();
        use_effect_with((), move |_| {
            if let Some(saved) = load_saved_selection() {
                difficulty.set(saved.difficulty);
                if image_by_slug(&saved.slug).is_some() {
                    selected_slug.set(Some(saved.slug));
                }
            }
            || ()
        });
    }

    {
        let viewport = viewport.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|window| {
                EventListener::new(&window, "resize", move |_| {
                    if let Some(size) = viewport_size() {
                        viewport.set(size);
                    }
                })
            });
            move || drop(listener)
        });
    }

    {
        let board = board.clone();
        let nonce_ref = nonce_ref.clone();
        use_effect_with(
            (
                selected_slug_value.clone(),
                difficulty_value,
                image_size_value,
                viewport_value,
            ),
            move |(slug, difficulty, image_size, viewport)| {
                let next = slug.as_deref().and_then(image_by_slug).and_then(|entry| {
                    let (image_width, image_height) = (*image_size)?;
                    let layout = compute_layout(
                        image_width as f32,
                        image_height as f32,
                        viewport.0,
                        *difficulty,
                    )?;
                    let nonce = {
                        let mut nonce = nonce_ref.borrow_mut();
                        *nonce = scatter_nonce(*nonce);
                        *nonce
                    };
                    let seed = scatter_seed(SCATTER_SEED, nonce, layout.cols, layout.rows);
                    console::log!("new board", layout.cols, layout.rows);
                    Some(PuzzleBoard::scrambled(
                        layout, entry.src, seed, viewport.0, viewport.1,
                    ))
                });
                board.set(next);
                || ()
            },
        );
    }

    let on_difficulty_change = {
        let difficulty = difficulty.clone();
        let selected_slug = selected_slug.clone();
        Callback::from(move |event: Event| {
            let select: HtmlSelectElement = event.target_unchecked_into();
            let next = Difficulty::parse(&select.value());
            difficulty.set(next);
            if let Some(slug) = (*selected_slug).as_deref() {
                save_selection(slug, next);
            }
        })
    };

    let on_image_load = {
        let image_size = image_size.clone();
        Callback::from(move |event: Event| {
            let image: HtmlImageElement = event.target_unchecked_into();
            let width = image.natural_width();
            let height = image.natural_height();
            if width > 0 && height > 0 {
                image_size.set(Some((width, height)));
            }
        })
    };

    let on_back = {
        let selected_slug = selected_slug.clone();
        let image_size = image_size.clone();
        let board = board.clone();
        Callback::from(move |_: MouseEvent| {
            selected_slug.set(None);
            image_size.set(None);
            board.set(None);
        })
    };

    let on_drag_over = Callback::from(|event: DragEvent| event.prevent_default());

    let on_drop = {
        let board = board.clone();
        let area_ref = area_ref.clone();
        Callback::from(move |event: DragEvent| {
            event.prevent_default();
            let Some(mut next) = (*board).clone() else {
                return;
            };
            let Some(data_transfer) = event.data_transfer() else {
                return;
            };
            let Ok(raw) = data_transfer.get_data(DRAG_FORMAT) else {
                return;
            };
            let Some(payload) = transfer::decode(&raw) else {
                console::warn!("drop ignored: malformed payload", raw);
                return;
            };
            let Some(pointer) = event_to_frame_coords(&event, &area_ref) else {
                return;
            };
            match next.end_drag(&payload, pointer) {
                DropOutcome::Ignored => return,
                DropOutcome::Solved => console::log!("puzzle solved"),
                DropOutcome::Placed | DropOutcome::Loose => {}
            }
            board.set(Some(next));
        })
    };

    let selected_entry: Option<&'static ImageEntry> =
        selected_slug_value.as_deref().and_then(image_by_slug);

    let Some(entry) = selected_entry else {
        let image_options: Html = IMAGE_CATALOG
            .iter()
            .map(|entry| {
                let on_pick = {
                    let selected_slug = selected_slug.clone();
                    let image_size = image_size.clone();
                    let slug = entry.slug;
                    Callback::from(move |_: MouseEvent| {
                        image_size.set(None);
                        selected_slug.set(Some(slug.to_string()));
                        save_selection(slug, difficulty_value);
                    })
                };
                html! {
                    <button key={entry.slug} class="image-option" onclick={on_pick}>
                        <img src={entry.src} alt={entry.label} />
                        <span>{ entry.label }</span>
                    </button>
                }
            })
            .collect();
        return html! {
            <div class="app">
                <div class="start-screen">
                    <h1>{ "pintu" }</h1>
                    <div class="controls">
                        <label for="difficulty">{ "Difficulty" }</label>
                        <select id="difficulty" onchange={on_difficulty_change}>
                            { difficulty_options(difficulty_value) }
                        </select>
                    </div>
                    <div class="image-options">
                        { image_options }
                    </div>
                </div>
            </div>
        };
    };

    let board_value = (*board).clone();
    let status = board_value
        .as_ref()
        .map(|current| progress_label(current.placed_count(), current.pieces().len()))
        .unwrap_or_else(|| progress_label(0, 0));

    let play_area = match board_value {
        Some(current) => {
            let layout = *current.layout();
            let image_src = current.image_src().to_string();
            let pieces_html: Html = current
                .pieces()
                .iter()
                .map(|piece| {
                    let piece_id = piece.id;
                    let on_drag_start = {
                        let board = board.clone();
                        let area_ref = area_ref.clone();
                        Callback::from(move |event: DragEvent| {
                            let Some(current) = board.as_ref() else {
                                return;
                            };
                            let Some(pointer) = event_to_frame_coords(&event, &area_ref) else {
                                event.prevent_default();
                                return;
                            };
                            let Some(payload) = current.begin_drag(piece_id, pointer) else {
                                event.prevent_default();
                                return;
                            };
                            let Some(encoded) = transfer::encode(&payload) else {
                                event.prevent_default();
                                return;
                            };
                            let Some(data_transfer) = event.data_transfer() else {
                                return;
                            };
                            if data_transfer.set_data(DRAG_FORMAT, &encoded).is_err() {
                                event.prevent_default();
                            }
                        })
                    };
                    let style = format!(
                        "position:absolute;left:{:.1}px;top:{:.1}px;width:{:.1}px;height:{:.1}px;\
                         background-image:url({});background-size:{:.1}px {:.1}px;\
                         background-position:{:.1}px {:.1}px;{}",
                        piece.current.0,
                        piece.current.1,
                        layout.piece_width,
                        layout.piece_height,
                        image_src,
                        layout.frame_width,
                        layout.frame_height,
                        piece.crop.0,
                        piece.crop.1,
                        if piece.placed {
                            "cursor:default;"
                        } else {
                            "cursor:grab;box-shadow:0 1px 4px rgba(0,0,0,0.4);"
                        },
                    );
                    html! {
                        <div
                            key={piece.id.to_string()}
                            class={classes!("piece", piece.placed.then_some("placed"))}
                            draggable={(!piece.placed).to_string()}
                            ondragstart={on_drag_start}
                            style={style}
                        />
                    }
                })
                .collect();
            let area_style = format!(
                "position:relative;width:{:.1}px;height:{:.1}px;",
                layout.frame_width,
                viewport_value.1.max(layout.frame_height + layout.piece_height),
            );
            let frame_style = format!(
                "position:absolute;left:0;top:0;width:{:.1}px;height:{:.1}px;\
                 border:2px dashed #8a8a8a;box-sizing:border-box;\
                 background-image:url({});background-size:{:.1}px {:.1}px;opacity:0.25;",
                layout.frame_width,
                layout.frame_height,
                image_src,
                layout.frame_width,
                layout.frame_height,
            );
            let solved_banner = if current.is_complete() {
                html! { <div class="solved-banner">{ "Puzzle complete!" }</div> }
            } else {
                html! {}
            };
            html! {
                <div
                    class="play-area"
                    ref={area_ref.clone()}
                    style={area_style}
                    ondrop={on_drop}
                    ondragover={on_drag_over}
                >
                    <div class="frame" style={frame_style}></div>
                    { pieces_html }
                    { solved_banner }
                </div>
            }
        }
        None => html! { <p class="loading">{ "Measuring image..." }</p> },
    };

    html! {
        <div class="app">
            <div class="game">
                <div class="toolbar">
                    <button class="back-button" onclick={on_back}>{ "Back" }</button>
                    <select onchange={on_difficulty_change}>
                        { difficulty_options(difficulty_value) }
                    </select>
                    <span class="status">{ status }</span>
                </div>
                <img src={entry.src} onload={on_image_load} style="display:none;" />
                { play_area }
            </div>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_label_formats_counts() {
        assert_eq!(progress_label(0, 0), "--");
        assert_eq!(progress_label(0, 24), "0/24");
        assert_eq!(progress_label(24, 24), "24/24");
    }

    #[test]
    fn saved_selection_round_trips_through_json() {
        let saved = SavedSelection {
            version: SELECTION_VERSION,
            slug: "harbor-sunrise".to_string(),
            difficulty: Difficulty::Hard,
        };
        let raw = serde_json::to_string(&saved).unwrap();
        let back: SavedSelection = serde_json::from_str(&raw).unwrap();
        assert_eq!(back.slug, saved.slug);
        assert_eq!(back.difficulty, Difficulty::Hard);
    }
}
