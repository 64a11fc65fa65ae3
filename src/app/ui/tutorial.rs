use eframe::egui::{
    self, Button, Color32, Context, CornerRadius, Id, Order, Rect, RichText, Sense, Stroke,
    StrokeKind, UiBuilder, vec2,
};

use crate::radar::TUTORIAL_STEPS;

use super::super::ViewModel;
use super::super::render_utils::{PRIMARY, SURFACE, TEXT_SECONDARY, with_opacity};

impl ViewModel {
    // The backdrop swallows pointer input while a card is up.
    pub(in crate::app) fn draw_tutorial(&mut self, ctx: &Context) {
        let Some(card) = self.session.tutorial().card() else {
            return;
        };
        let step = self.session.tutorial().step().unwrap_or(0);
        let screen = ctx.content_rect();
        let mut advance = false;

        egui::Area::new(Id::new("tutorial_overlay"))
            .order(Order::Foreground)
            .fixed_pos(screen.min)
            .show(ctx, |ui| {
                let backdrop = ui.allocate_rect(screen, Sense::click_and_drag());
                ui.painter()
                    .rect_filled(screen, 0.0, Color32::from_black_alpha(170));
                if backdrop.clicked() {
                    advance = true;
                }

                let card_rect = Rect::from_center_size(screen.center(), vec2(380.0, 220.0));
                ui.painter().rect(
                    card_rect,
                    CornerRadius::same(14),
                    SURFACE,
                    Stroke::new(2.0, PRIMARY),
                    StrokeKind::Inside,
                );

                ui.scope_builder(UiBuilder::new().max_rect(card_rect.shrink(18.0)), |ui| {
                    ui.vertical_centered(|ui| {
                        ui.horizontal(|ui| {
                            for dot in 0..TUTORIAL_STEPS {
                                let (rect, _) = ui.allocate_exact_size(vec2(10.0, 10.0), Sense::hover());
                                let color = if dot == step {
                                    PRIMARY
                                } else {
                                    with_opacity(PRIMARY, 0.3)
                                };
                                ui.painter().circle_filled(rect.center(), 4.0, color);
                            }
                        });
                        ui.add_space(6.0);
                        ui.heading(card.title);
                        ui.add_space(4.0);
                        ui.label(RichText::new(card.body).color(TEXT_SECONDARY));
                        ui.add_space(14.0);

                        let button = Button::new(RichText::new(card.button).strong().color(Color32::WHITE))
                            .fill(PRIMARY)
                            .min_size(vec2(140.0, 32.0));
                        if ui.add(button).clicked() {
                            advance = true;
                        }
                    });
                });
            });

        if advance {
            self.session.advance_tutorial();
        }
    }
}
