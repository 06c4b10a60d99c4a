use egui::{Color32, RichText};
use egui_swipeout::{CloseBus, Side, SwipeAction, Swipeout, SwipeoutOptions, SwipeoutView};
use std::io::stdout;
use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

const ARCHIVE_FILL: Color32 = Color32::from_rgb(76, 175, 80);
const FLAG_FILL: Color32 = Color32::from_rgb(255, 152, 0);
const DELETE_FILL: Color32 = Color32::from_rgb(244, 67, 54);

#[derive(Debug, Clone, Copy, PartialEq)]
enum Preset {
    Symmetric,
    Bidirectional,
    DirectionLocked,
}

impl Preset {
    fn options(self) -> SwipeoutOptions {
        match self {
            Preset::Symmetric => SwipeoutOptions::symmetric(),
            Preset::Bidirectional => SwipeoutOptions::bidirectional(),
            Preset::DirectionLocked => SwipeoutOptions::direction_locked(),
        }
    }
}

struct Message {
    from: &'static str,
    date: &'static str,
    subject: &'static str,
    preview: &'static str,
    flagged: bool,
    swipeout: Swipeout,
}

pub struct App {
    bus: CloseBus,
    preset: Preset,
    messages: Vec<Message>,
    last_action: Option<String>,
}

impl App {
    pub fn new(_: &eframe::CreationContext<'_>) -> Self {
        let bus = CloseBus::new();
        let preset = Preset::Bidirectional;
        let messages = INBOX
            .iter()
            .map(|&(from, date, subject, preview)| Message {
                from,
                date,
                subject,
                preview,
                flagged: false,
                swipeout: Swipeout::attach(&bus, preset.options()).unwrap(),
            })
            .collect();

        Self {
            bus,
            preset,
            messages,
            last_action: None,
        }
    }

    fn set_preset(&mut self, preset: Preset) {
        self.preset = preset;
        for message in &mut self.messages {
            let swipeout = Swipeout::attach(&self.bus, preset.options()).unwrap();
            std::mem::replace(&mut message.swipeout, swipeout).detach();
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let mut preset = self.preset;
                ui.radio_value(&mut preset, Preset::Symmetric, "Symmetric");
                ui.radio_value(&mut preset, Preset::Bidirectional, "Bidirectional");
                ui.radio_value(&mut preset, Preset::DirectionLocked, "Direction locked");
                if preset != self.preset {
                    self.set_preset(preset);
                }
            });
        });

        egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
            ui.label(self.last_action.as_deref().unwrap_or("Swipe a message"));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let mut removed = None;
            egui::ScrollArea::vertical().show(ui, |ui| {
                for (index, message) in self.messages.iter_mut().enumerate() {
                    let flag = if message.flagged { "Unflag" } else { "Flag" };
                    let response = SwipeoutView::new(&mut message.swipeout)
                        .left_actions(vec![SwipeAction::new("Archive", ARCHIVE_FILL)])
                        .right_actions(vec![
                            SwipeAction::new(flag, FLAG_FILL),
                            SwipeAction::new("Delete", DELETE_FILL),
                        ])
                        .show(ui, |ui| {
                            ui.style_mut().interaction.selectable_labels = false;
                            ui.vertical(|ui| {
                                ui.horizontal(|ui| {
                                    ui.label(RichText::new(message.from).strong());
                                    ui.label(RichText::new(message.date).weak());
                                    if message.flagged {
                                        ui.label(RichText::new("flagged").color(FLAG_FILL));
                                    }
                                });
                                ui.label(message.subject);
                                ui.label(RichText::new(message.preview).small().weak());
                            });
                        });
                    ui.separator();

                    match response.clicked {
                        Some((Side::Left, _)) => {
                            self.last_action = Some(format!("Archived \"{}\"", message.subject));
                            removed = Some(index);
                        }
                        Some((Side::Right, 0)) => {
                            message.flagged = !message.flagged;
                            self.last_action = Some(format!("{flag} \"{}\"", message.subject));
                        }
                        Some((Side::Right, _)) => {
                            self.last_action = Some(format!("Deleted \"{}\"", message.subject));
                            removed = Some(index);
                        }
                        None => {}
                    }
                }
            });

            if let Some(index) = removed {
                self.messages.remove(index).swipeout.detach();
            }
        });
    }
}

// (from, date, subject, preview)
const INBOX: &[(&str, &str, &str, &str)] = &[
    ("Allen Buchinski", "Yesterday", "Pick up from airport?", "Could you pick me up?"),
    ("Jane Daniels", "Yesterday", "Dinner", "See everyone at dinner tonight."),
    ("Mary Ellen Mason", "Sunday", "Birthday", "We had an amazing time."),
    ("Ryan Romero", "9/7", "New kitten", "Photos of the newest family member."),
    ("David Patton", "9/7", "Weekend trip", "Going to the coast, want anything?"),
    ("Paul Hikiji", "9/7", "Moving next week", "Remember you said you'd help?"),
    ("Graham McBride", "9/7", "This weekend", "Are we still going?"),
];

fn init_log() {
    let env_filter = EnvFilter::new("egui_swipeout=debug,inbox=info");
    let formatting_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_ansi(true)
        .with_line_number(true)
        .with_writer(stdout.with_max_level(Level::DEBUG));

    Registry::default()
        .with(env_filter)
        .with(formatting_layer)
        .init();
}

fn main() -> eframe::Result {
    init_log();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 640.0])
            .with_min_inner_size([300.0, 320.0]),
        ..Default::default()
    };

    eframe::run_native(
        "inbox_example",
        native_options,
        Box::new(|cc| Ok(Box::new(App::new(cc)))),
    )
}
