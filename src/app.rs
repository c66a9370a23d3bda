use leptos::html::Canvas;
use leptos::*;

use crate::domain::{
    game::{
        DEFAULT_BARS_PER_PANEL, DEFAULT_PANEL_COUNT, GamePhase, GameSession, LineKind, PlotArea,
    },
    logging::LogComponent,
};
use crate::global_state::{session_signal, status_signal};
use crate::infrastructure::rendering::CanvasRenderer;

const CANVAS_ID: &str = "panel-canvas";
const CANVAS_WIDTH: u32 = 800;
const CANVAS_HEIGHT: u32 = 420;
// Plot area inside the canvas; clicks map through the same geometry.
const PLOT_TOP: f32 = 10.0;
const PLOT_HEIGHT: f32 = 400.0;

/// 🦀 Root component of the support/resistance trainer
#[component]
pub fn App() -> impl IntoView {
    match GameSession::start(DEFAULT_PANEL_COUNT, DEFAULT_BARS_PER_PANEL, None) {
        Ok(session) => session_signal().set(Some(session)),
        Err(e) => status_signal().set(format!("❌ Failed to start session: {}", e)),
    }

    view! {
        <style>
            {r#"
            .trainer-app {
                font-family: 'SF Pro Display', -apple-system, BlinkMacSystemFont, sans-serif;
                background: linear-gradient(135deg, #1e3c72 0%, #2a5298 100%);
                min-height: 100vh;
                padding: 20px;
                color: white;
            }

            .header {
                text-align: center;
                margin-bottom: 20px;
                background: rgba(255, 255, 255, 0.1);
                backdrop-filter: blur(10px);
                padding: 20px;
                border-radius: 15px;
                border: 1px solid rgba(255, 255, 255, 0.2);
            }

            .progress-info {
                display: flex;
                justify-content: center;
                gap: 40px;
                margin-top: 15px;
            }

            .progress-item {
                text-align: center;
            }

            .progress-value {
                font-size: 24px;
                font-weight: 700;
                color: #72c685;
                font-family: 'Courier New', monospace;
            }

            .progress-label {
                font-size: 12px;
                color: #a0a0a0;
                margin-top: 5px;
            }

            .panel-container {
                display: flex;
                flex-direction: column;
                align-items: center;
                gap: 10px;
                margin-bottom: 20px;
            }

            .feedback-banner {
                min-height: 22px;
                color: #f39c12;
                font-size: 16px;
                font-weight: bold;
                text-align: center;
            }

            .controls {
                display: flex;
                justify-content: center;
                gap: 10px;
                margin-bottom: 20px;
            }

            .line-btn {
                background: #4a5d73;
                color: white;
                border: none;
                padding: 10px 20px;
                border-radius: 8px;
                cursor: pointer;
                font-size: 14px;
            }

            .line-btn:hover {
                background: #5a6d83;
            }

            .line-btn.active {
                background: #f39c12;
            }

            .line-btn:disabled {
                opacity: 0.4;
                cursor: default;
            }

            .summary {
                background: rgba(0, 0, 0, 0.8);
                border-radius: 10px;
                padding: 15px;
                max-width: 500px;
                margin: 0 auto;
                border: 1px solid #4a5d73;
                text-align: center;
            }

            .score-line {
                font-family: 'Courier New', monospace;
                color: #e0e0e0;
                margin: 2px 0;
            }

            .average-score {
                font-size: 28px;
                font-weight: 700;
                color: #72c685;
                margin-top: 10px;
            }

            .status {
                color: #72c685;
                font-size: 14px;
                text-align: center;
            }
            "#}
        </style>
        <div class="trainer-app">
            <Header />
            <PanelContainer />
            <Controls />
            <Summary />
        </div>
    }
}

/// 📊 Header with session progression and click feedback
#[component]
fn Header() -> impl IntoView {
    let progress = move || {
        session_signal().with(|session| match session {
            Some(s) => format!("{} / {}", s.current_panel_index() + 1, s.panel_count()),
            None => "-".to_string(),
        })
    };
    let completed = move || {
        session_signal().with(|session| {
            session.as_ref().map(|s| s.scores().len().to_string()).unwrap_or_default()
        })
    };
    let feedback = move || {
        session_signal().with(|session| {
            session.as_ref().map(|s| s.feedback_text().to_string()).unwrap_or_default()
        })
    };

    view! {
        <div class="header">
            <h1>"🎯 Support & Resistance Trainer"</h1>
            <p>"Click the chart to place two support and two resistance levels"</p>

            <div class="progress-info">
                <div class="progress-item">
                    <div class="progress-value">{progress}</div>
                    <div class="progress-label">"Panel"</div>
                </div>
                <div class="progress-item">
                    <div class="progress-value">{completed}</div>
                    <div class="progress-label">"Scored"</div>
                </div>
            </div>
            <div class="feedback-banner">{feedback}</div>
        </div>
    }
}

/// 🎨 Canvas panel wired into the session state machine
#[component]
fn PanelContainer() -> impl IntoView {
    let canvas_ref = create_node_ref::<Canvas>();

    // Redraw whenever the session state changes (placements, panel advance,
    // reset). The same PLOT_TOP/PLOT_HEIGHT geometry interprets clicks.
    create_effect(move |_| {
        if canvas_ref.get().is_none() {
            return;
        }
        session_signal().with(|session| {
            let Some(session) = session else {
                return;
            };
            let panel = session.active_panel();
            let Some(area) = PlotArea::for_panel(panel, PLOT_TOP, PLOT_HEIGHT) else {
                return;
            };

            let renderer =
                CanvasRenderer::new(CANVAS_ID.to_string(), CANVAS_WIDTH, CANVAS_HEIGHT);
            if let Err(e) = renderer.render_panel(panel, session.placements(), &area) {
                crate::log_error!(LogComponent::Presentation("PanelContainer"), "Render failed: {:?}", e);
            }
        });
    });

    let handle_click = move |event: web_sys::MouseEvent| {
        let pixel_y = event.offset_y() as f32;
        session_signal().update(|session| {
            if let Some(session) = session {
                session.place(pixel_y, PLOT_TOP, PLOT_HEIGHT);
            }
        });
    };

    view! {
        <div class="panel-container">
            <canvas
                id=CANVAS_ID
                node_ref=canvas_ref
                width=CANVAS_WIDTH
                height=CANVAS_HEIGHT
                style="border: 2px solid #4a5d73; border-radius: 10px; background: #2c3e50; cursor: crosshair;"
                on:click=handle_click
            />
            <div class="status">{move || status_signal().get()}</div>
        </div>
    }
}

/// 🕹️ Line selection and session controls
#[component]
fn Controls() -> impl IntoView {
    let is_selected = move |kind: LineKind| {
        session_signal()
            .with(|session| session.as_ref().and_then(|s| s.selected_line()) == Some(kind))
    };
    let can_advance = move || {
        session_signal().with(|session| session.as_ref().map(|s| s.can_advance()).unwrap_or(false))
    };

    view! {
        <div class="controls">
            <button
                class="line-btn"
                class:active=move || is_selected(LineKind::Support)
                on:click=move |_| {
                    session_signal().update(|s| {
                        if let Some(s) = s {
                            s.select_line(LineKind::Support);
                        }
                    })
                }
            >
                "Support"
            </button>
            <button
                class="line-btn"
                class:active=move || is_selected(LineKind::Resistance)
                on:click=move |_| {
                    session_signal().update(|s| {
                        if let Some(s) = s {
                            s.select_line(LineKind::Resistance);
                        }
                    })
                }
            >
                "Resistance"
            </button>
            <button
                class="line-btn"
                prop:disabled=move || !can_advance()
                on:click=move |_| {
                    session_signal().update(|s| {
                        if let Some(s) = s {
                            s.advance();
                        }
                    })
                }
            >
                "Next panel ▶"
            </button>
            <button
                class="line-btn"
                on:click=move |_| {
                    session_signal().update(|s| {
                        if let Some(s) = s {
                            s.reset();
                        }
                    })
                }
            >
                "Reset"
            </button>
        </div>
    }
}

/// 🏁 Per-panel scores and the final average
#[component]
fn Summary() -> impl IntoView {
    let finished = move || {
        session_signal().with(|session| {
            session.as_ref().map(|s| s.phase() == GamePhase::Finished).unwrap_or(false)
        })
    };
    let scores = move || {
        session_signal().with(|session| {
            session
                .as_ref()
                .map(|s| s.scores().iter().copied().enumerate().collect::<Vec<_>>())
                .unwrap_or_default()
        })
    };
    let average = move || {
        session_signal().with(|session| {
            session
                .as_ref()
                .and_then(|s| s.average_score())
                .map(|avg| format!("Average: {:.2}", avg))
                .unwrap_or_default()
        })
    };

    view! {
        <Show when=finished fallback=|| ()>
            <div class="summary">
                <h2>"Session complete! 🏁"</h2>
                <For
                    each=scores
                    key=|(i, _)| *i
                    children=move |(i, score)| {
                        view! {
                            <div class="score-line">{format!("Panel {:>2}: {}", i + 1, score)}</div>
                        }
                    }
                />
                <div class="average-score">{average}</div>
            </div>
        </Show>
    }
}
