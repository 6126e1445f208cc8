use std::rc::Rc;

use gloo::console::log;
use web_sys::{Element, MouseEvent};
use yew::prelude::*;

use teban_core::{
    parse_move, square_name, Board, GridPos, MoveAuthority, Side, BOARD_FILES, BOARD_RANKS,
};

use crate::drag::{DragController, DropOutcome};
use crate::hand::{CompletionCallback, HandAnimator};

/// Scripted black replies tried in order until one has a mover on its
/// origin square. Stands in for the agent that would normally decide.
const REPLY_BOOK: [&str; 4] = ["e7:e5", "d7:d5", "g8:f6", "b8:c6"];

/// The surface's programmatic move trigger: how an externally decided move
/// (an agent's choice) gets rendered to the user. Animating does not commit
/// the move; callers do that independently, typically from `on_complete`.
#[derive(Clone)]
pub(crate) struct BoardHandle {
    board: NodeRef,
    animator: Rc<HandAnimator>,
}

impl BoardHandle {
    pub(crate) fn animate_move(
        &self,
        from: GridPos,
        to: GridPos,
        side: Side,
        on_complete: Option<CompletionCallback>,
    ) {
        let Some(board) = self.board.cast::<Element>() else {
            if let Some(callback) = on_complete {
                callback();
            }
            return;
        };
        self.animator.play_move(&board, from, to, side, on_complete);
    }
}

#[function_component(App)]
pub(crate) fn app() -> Html {
    let board = use_state(Board::initial);
    let board_ref = use_node_ref();
    let drag = use_memo((), |_| DragController::new());
    let animator = use_memo((), |_| HandAnimator::new());

    // Teardown is the one cancellation path: any live overlay elements come
    // off the surface no matter which phase was in progress.
    {
        let animator = Rc::clone(&animator);
        use_effect_with((), move |_| move || animator.cancel());
    }

    let onmousedown = {
        let drag = Rc::clone(&drag);
        let animator = Rc::clone(&animator);
        let board_ref = board_ref.clone();
        Callback::from(move |event: MouseEvent| {
            // A replay session owns the surface; the drag path stays out.
            if animator.is_animating() {
                return;
            }
            if let Some(board_el) = board_ref.cast::<Element>() {
                drag.grab(&event, &board_el);
            }
        })
    };

    let onmousemove = {
        let drag = Rc::clone(&drag);
        let board_ref = board_ref.clone();
        Callback::from(move |event: MouseEvent| {
            if let Some(board_el) = board_ref.cast::<Element>() {
                drag.drag(&event, &board_el);
            }
        })
    };

    let onmouseup = {
        let drag = Rc::clone(&drag);
        let board_ref = board_ref.clone();
        let board = board.clone();
        Callback::from(move |event: MouseEvent| {
            let Some(board_el) = board_ref.cast::<Element>() else {
                return;
            };
            let mut next = (*board).clone();
            if let DropOutcome::Committed(mv) = DragController::drop(&drag, &event, &board_el, &mut next) {
                log!(format!(
                    "played {}:{}",
                    square_name(mv.from).unwrap_or_default(),
                    square_name(mv.to).unwrap_or_default()
                ));
                board.set(next);
            }
        })
    };

    let on_reply = {
        let board = board.clone();
        let drag = Rc::clone(&drag);
        let handle = BoardHandle {
            board: board_ref.clone(),
            animator: Rc::clone(&animator),
        };
        Callback::from(move |_: MouseEvent| {
            if !reply_ready(handle.animator.is_animating(), drag.is_dragging(), board.turn) {
                return;
            }
            let Some((from, to)) = pick_reply(&board) else {
                return;
            };
            let board = board.clone();
            handle.animate_move(
                from,
                to,
                Side::Black,
                Some(Box::new(move || {
                    let mut next = (*board).clone();
                    if next.attempt_move(from, to) {
                        board.set(next);
                    }
                })),
            );
        })
    };

    let mut tiles = Vec::with_capacity(64);
    for rank in (0..BOARD_RANKS).rev() {
        for file in 0..BOARD_FILES {
            let pos = GridPos::new(file, rank);
            let name = square_name(pos).unwrap_or_default();
            let shade = if (file + rank) % 2 == 0 { "dark" } else { "light" };
            let piece = board.piece_at(pos).map(|piece| {
                let side_class = match piece.side {
                    Side::White => "white",
                    Side::Black => "black",
                };
                html! {
                    <div class={classes!("piece", side_class)}>
                        { piece.kind.glyph(piece.side).to_string() }
                    </div>
                }
            });
            tiles.push(html! {
                <div key={name.clone()} class={classes!("tile", shade)} data-square={name}>
                    { for piece }
                </div>
            });
        }
    }

    let rank_labels = (0..BOARD_RANKS)
        .rev()
        .map(|rank| html! { <span class="axis-label">{ (rank + 1).to_string() }</span> });
    let file_labels = (0..BOARD_FILES)
        .map(|file| html! { <span class="axis-label">{ char::from(b'a' + file as u8).to_string() }</span> });

    html! {
        <div class="app">
            <h1 class="title">{ "手番 teban" }</h1>
            <div class="board-wrap">
                <div class="board-row">
                    <div class="rank-labels">{ for rank_labels }</div>
                    <div
                        class="board"
                        ref={board_ref}
                        onmousedown={onmousedown}
                        onmousemove={onmousemove}
                        onmouseup={onmouseup}
                    >
                        { for tiles }
                    </div>
                </div>
                <div class="file-labels">{ for file_labels }</div>
            </div>
            <div class="controls">
                <button class="reply-button" onclick={on_reply}>{ "Reply for black" }</button>
            </div>
        </div>
    }
}

/// A scripted reply may start only while the surface is quiet: no replay in
/// flight, no piece held by the pointer, and black to move. A pointer-up off
/// the board leaves the drag session alive, so `dragging` must be checked
/// separately from `animating`.
fn reply_ready(animating: bool, dragging: bool, turn: Side) -> bool {
    !animating && !dragging && turn == Side::Black
}

fn pick_reply(board: &Board) -> Option<(GridPos, GridPos)> {
    REPLY_BOOK.iter().find_map(|text| {
        let (from, to) = parse_move(text).ok()?;
        let mover = board.piece_at(from)?;
        if mover.side != Side::Black {
            return None;
        }
        if board.piece_at(to).is_some_and(|other| other.side == Side::Black) {
            return None;
        }
        Some((from, to))
    })
}
