//! Swipe card canvas primitive
//!
//! Draws a card translated and tilted by a [`CardTransform`] and turns mouse
//! and window events into [`CardEvent`]s.
//!
//! # Design
//!
//! This is a primitive component that implements `canvas::Program` trait.
//! It uses generic Message types and does not depend on application-specific types.

use iced::widget::canvas::{Frame, Geometry, Path, Program, Stroke, Text};
use iced::widget::{Action, Canvas};
use iced::{Element, Fill, Point, Rectangle, Renderer, Size, Theme, Vector, mouse, window};

use crate::ui::swipe::{CardEvent, CardTransform};
use crate::ui::theme;

/// Largest card size; smaller windows shrink it
const MAX_CARD_SIZE: Size = Size {
    width: 360.0,
    height: 480.0,
};
/// Card share of the canvas when the window is small
const CARD_FILL: f32 = 0.85;
const CORNER_RADIUS: f32 = 18.0;
const PADDING: f32 = 28.0;
const TITLE_SIZE: f32 = 26.0;
const BODY_SIZE: f32 = 16.0;

/// Pointer tracking kept by the canvas between events
#[derive(Debug, Default)]
pub struct PointerState {
    /// Last absolute cursor position while the button is held on the card
    last: Option<Point>,
}

impl PointerState {
    pub fn is_dragging(&self) -> bool {
        self.last.is_some()
    }
}

/// Everything needed to draw one frame of the card
pub struct CardCanvas<'a, Message> {
    pub title: &'a str,
    pub body: &'a str,
    pub caption: Option<&'a str>,
    pub transform: CardTransform,
    /// Signed swipe progress toward a fling (-1.0 pass .. 1.0 accept)
    pub hint: f32,
    /// Drag lift (0.0 resting .. 1.0 held)
    pub lift: f32,
    pub visible: bool,
    /// Whether the card is still following the pointer; once it stops (a
    /// shortcut cancelled or flung it) the held button is forgotten
    pub dragging: bool,
    on_event: fn(CardEvent) -> Message,
}

impl<'a, Message> CardCanvas<'a, Message> {
    pub fn new(title: &'a str, body: &'a str, on_event: fn(CardEvent) -> Message) -> Self {
        Self {
            title,
            body,
            caption: None,
            transform: CardTransform::IDENTITY,
            hint: 0.0,
            lift: 0.0,
            visible: true,
            dragging: false,
            on_event,
        }
    }

    pub fn caption(mut self, caption: Option<&'a str>) -> Self {
        self.caption = caption;
        self
    }

    pub fn transform(mut self, transform: CardTransform) -> Self {
        self.transform = transform;
        self
    }

    pub fn hint(mut self, hint: f32) -> Self {
        self.hint = hint.clamp(-1.0, 1.0);
        self
    }

    pub fn lift(mut self, lift: f32) -> Self {
        self.lift = lift.clamp(0.0, 1.0);
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn dragging(mut self, dragging: bool) -> Self {
        self.dragging = dragging;
        self
    }

    fn publish(&self, event: CardEvent) -> Option<Action<Message>> {
        Some(Action::publish((self.on_event)(event)).and_capture())
    }
}

/// Card size for a canvas of `bounds`
pub fn card_size(bounds: Size) -> Size {
    Size::new(
        MAX_CARD_SIZE.width.min(bounds.width * CARD_FILL),
        MAX_CARD_SIZE.height.min(bounds.height * CARD_FILL),
    )
}

/// Untilted card rectangle in canvas coordinates
pub fn card_rect(bounds: Size, translation: Vector) -> Rectangle {
    let size = card_size(bounds);
    Rectangle::new(
        Point::new(
            (bounds.width - size.width) / 2.0 + translation.x,
            (bounds.height - size.height) / 2.0 + translation.y,
        ),
        size,
    )
}

impl<Message> Program<Message> for CardCanvas<'_, Message> {
    type State = PointerState;

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        match event {
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if !self.visible {
                    return None;
                }
                let local = cursor.position_in(bounds)?;
                if !card_rect(bounds.size(), self.transform.translation).contains(local) {
                    return None;
                }
                state.last = cursor.position();
                self.publish(CardEvent::DragStarted)
            }
            iced::Event::Mouse(mouse::Event::CursorMoved { position }) => {
                let last = self.held(state)?;
                state.last = Some(*position);
                self.publish(CardEvent::Dragged(*position - last))
            }
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                self.held(state)?;
                state.last = None;
                self.publish(CardEvent::DragEnded)
            }
            // Losing the pointer or the window aborts the gesture
            iced::Event::Mouse(mouse::Event::CursorLeft)
            | iced::Event::Window(window::Event::Unfocused) => {
                self.held(state)?;
                state.last = None;
                self.publish(CardEvent::DragCancelled)
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        if !self.visible {
            return vec![frame.into_geometry()];
        }

        let size = card_size(bounds.size());
        let center = Vector::new(bounds.width / 2.0, bounds.height / 2.0);

        frame.with_save(|frame| {
            frame.translate(center + self.transform.translation);
            frame.rotate(self.transform.radians());

            let top_left = Point::new(-size.width / 2.0, -size.height / 2.0);

            // Shadow grows while the card is held
            let shadow_offset = 4.0 + 10.0 * self.lift;
            let shadow = Path::rounded_rectangle(
                top_left + Vector::new(0.0, shadow_offset),
                size,
                CORNER_RADIUS.into(),
            );
            frame.fill(&shadow, theme::shadow_color(theme).scale_alpha(0.6 + 0.4 * self.lift));

            let card = Path::rounded_rectangle(top_left, size, CORNER_RADIUS.into());
            frame.fill(&card, theme::surface_elevated(theme));
            frame.stroke(
                &card,
                Stroke::default()
                    .with_width(1.0)
                    .with_color(theme::border_color(theme)),
            );

            self.draw_hint(frame, theme, top_left, size);
            self.draw_text(frame, theme, top_left, size);
        });

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if state.is_dragging() {
            return mouse::Interaction::Grabbing;
        }
        let over_card = self.visible
            && cursor
                .position_in(bounds)
                .is_some_and(|p| card_rect(bounds.size(), self.transform.translation).contains(p));
        if over_card {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}

impl<Message> CardCanvas<'_, Message> {
    /// Last pointer position of a gesture the card is still following
    fn held(&self, state: &mut PointerState) -> Option<Point> {
        if !self.dragging {
            state.last = None;
        }
        state.last
    }

    /// Body paragraph starting at `position`, wrapped to the card's inner width
    fn body_text(&self, theme: &Theme, position: Point, card: Size) -> Text {
        Text {
            content: self.body.to_string(),
            position,
            max_width: card.width - PADDING * 2.0,
            color: theme::text_secondary(theme),
            size: iced::Pixels(BODY_SIZE),
            line_height: iced::widget::text::LineHeight::Relative(1.5),
            align_y: iced::alignment::Vertical::Top,
            ..Text::default()
        }
    }

    /// Tint and stamp showing which way the card is leaning
    fn draw_hint(&self, frame: &mut Frame, theme: &Theme, top_left: Point, size: Size) {
        if self.hint == 0.0 {
            return;
        }

        let strength = self.hint.abs();
        let (color, label, x) = if self.hint > 0.0 {
            (theme::success(theme), "ACCEPT", top_left.x + PADDING)
        } else {
            (
                theme::danger(theme),
                "PASS",
                top_left.x + size.width - PADDING,
            )
        };

        let tint = Path::rounded_rectangle(top_left, size, CORNER_RADIUS.into());
        frame.fill(&tint, color.scale_alpha(0.12 * strength));

        let align_x = if self.hint > 0.0 {
            iced::alignment::Horizontal::Left
        } else {
            iced::alignment::Horizontal::Right
        };
        frame.fill_text(Text {
            content: label.to_string(),
            position: Point::new(x, top_left.y + PADDING),
            color: color.scale_alpha(strength),
            size: iced::Pixels(22.0),
            align_x: align_x.into(),
            align_y: iced::alignment::Vertical::Top,
            ..Text::default()
        });
    }

    fn draw_text(&self, frame: &mut Frame, theme: &Theme, top_left: Point, size: Size) {
        let text_left = top_left.x + PADDING;
        let mut y = top_left.y + size.height * 0.35;

        frame.fill_text(Text {
            content: self.title.to_string(),
            position: Point::new(text_left, y),
            color: theme::text_primary(theme),
            size: iced::Pixels(TITLE_SIZE),
            align_y: iced::alignment::Vertical::Top,
            ..Text::default()
        });
        y += TITLE_SIZE * 1.6;

        frame.fill_text(self.body_text(theme, Point::new(text_left, y), size));

        if let Some(caption) = self.caption {
            frame.fill_text(Text {
                content: caption.to_uppercase(),
                position: Point::new(text_left, top_left.y + size.height - PADDING),
                color: theme::text_muted(theme),
                size: iced::Pixels(12.0),
                align_y: iced::alignment::Vertical::Bottom,
                ..Text::default()
            });
        }
    }
}

/// Create a card canvas filling the available space
pub fn view_card<'a, Message: 'a>(card: CardCanvas<'a, Message>) -> Element<'a, Message> {
    Canvas::new(card).width(Fill).height(Fill).into()
}
