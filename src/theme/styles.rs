//! Global CSS styles for the invitation.
//!
//! Blush and gold on ivory, serif titles.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Palette */
  --ivory: #fffaf5;
  --blush: #f8e1e4;
  --rose: #d4667a;
  --rose-deep: #b04a5e;
  --gold: #c9a96e;
  --gold-soft: rgba(201, 169, 110, 0.3);
  --ink: #3d2c2e;
  --ink-muted: rgba(61, 44, 46, 0.65);
  --shadow: 0 10px 30px rgba(61, 44, 46, 0.12);

  /* Typography */
  --font-script: 'Great Vibes', 'Dancing Script', cursive;
  --font-serif: 'Playfair Display', 'Cormorant Garamond', Georgia, serif;
  --font-sans: 'Montserrat', 'Segoe UI', sans-serif;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-slow: 600ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  height: 100%;
  overflow: hidden;
  background: var(--ivory);
  color: var(--ink);
  font-family: var(--font-sans);
}

/* === Page scroller === */
.page {
  height: 100vh;
  overflow-y: auto;
  scroll-behavior: smooth;
  outline: none;
}

.page.scroll-locked {
  overflow: hidden;
}

/* === Navbar === */
.navbar {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 100;
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1.25rem 1.5rem;
  transition: background var(--transition-normal), padding var(--transition-normal);
}

.navbar.scrolled {
  background: rgba(255, 250, 245, 0.95);
  box-shadow: var(--shadow);
  padding: 0.75rem 1.5rem;
}

.nav-brand {
  font-family: var(--font-script);
  font-size: 1.6rem;
  color: var(--rose);
}

.nav-toggle {
  display: none;
  background: none;
  border: none;
  font-size: 1.5rem;
  color: var(--ink);
  cursor: pointer;
}

.nav-menu {
  display: flex;
  gap: 1.25rem;
  list-style: none;
}

.nav-link {
  color: var(--ink);
  text-decoration: none;
  font-size: 0.9rem;
  letter-spacing: 0.05em;
  transition: color var(--transition-fast);
}

.nav-link:hover {
  color: var(--rose);
}

@media (max-width: 768px) {
  .nav-toggle {
    display: block;
  }

  .nav-menu {
    position: absolute;
    top: 100%;
    left: 0;
    right: 0;
    flex-direction: column;
    align-items: center;
    padding: 1rem 0;
    background: var(--ivory);
    box-shadow: var(--shadow);
    transform: translateY(-150%);
    transition: transform var(--transition-normal);
  }

  .nav-menu.active {
    transform: translateY(0);
  }
}

/* === Hero === */
.hero {
  position: relative;
  height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  overflow: hidden;
  text-align: center;
  color: #fff;
}

.slider-container {
  position: absolute;
  inset: 0;
}

.slide {
  position: absolute;
  inset: 0;
  background-size: cover;
  background-position: center;
  opacity: 0;
  transition: opacity 1s ease;
}

.slide::after {
  content: '';
  position: absolute;
  inset: 0;
  background: rgba(61, 44, 46, 0.35);
}

.slide.active {
  opacity: 1;
}

.slider-btn {
  position: absolute;
  top: 50%;
  z-index: 3;
  transform: translateY(-50%);
  width: 44px;
  height: 44px;
  border: none;
  border-radius: 50%;
  background: rgba(255, 255, 255, 0.25);
  color: #fff;
  font-size: 1.6rem;
  cursor: pointer;
}

.slider-btn--prev { left: 1rem; }
.slider-btn--next { right: 1rem; }

.slider-dots {
  position: absolute;
  bottom: 2rem;
  left: 50%;
  z-index: 3;
  display: flex;
  gap: 0.5rem;
  transform: translateX(-50%);
}

.slider-dot {
  width: 10px;
  height: 10px;
  border-radius: 50%;
  background: rgba(255, 255, 255, 0.5);
  cursor: pointer;
  transition: background var(--transition-fast), transform var(--transition-fast);
}

.slider-dot.active {
  background: #fff;
  transform: scale(1.3);
}

.hero-content {
  position: relative;
  z-index: 2;
  will-change: transform;
}

.hero-subtitle {
  font-family: var(--font-serif);
  font-style: italic;
  letter-spacing: 0.2em;
  text-transform: uppercase;
  font-size: 0.85rem;
}

.hero-title {
  display: flex;
  flex-direction: column;
  font-family: var(--font-script);
  font-weight: 400;
  font-size: 3.5rem;
  line-height: 1.2;
}

.hero-amp {
  color: var(--gold);
  font-size: 2.5rem;
}

/* === Sections === */
.section {
  padding: 5rem 1.5rem;
  text-align: center;
}

.section:nth-of-type(even) {
  background: var(--blush);
}

.section-title {
  font-family: var(--font-script);
  font-weight: 400;
  font-size: 2.6rem;
  color: var(--rose);
  margin-bottom: 2.5rem;
}

/* === Countdown === */
.countdown {
  display: flex;
  justify-content: center;
  gap: 1rem;
  flex-wrap: wrap;
}

.countdown-item {
  display: flex;
  flex-direction: column;
  min-width: 80px;
  padding: 1rem;
  border: 1px solid var(--gold);
  border-radius: 12px;
  background: #fff;
  box-shadow: var(--shadow);
}

.countdown-number {
  font-family: var(--font-serif);
  font-size: 2rem;
  color: var(--rose-deep);
}

.countdown-label {
  font-size: 0.8rem;
  color: var(--ink-muted);
  text-transform: uppercase;
}

/* === Events === */
.events-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
  gap: 1.5rem;
}

.event-card {
  padding: 2rem 1.5rem;
  border-radius: 16px;
  background: #fff;
  box-shadow: var(--shadow);
}

.event-card__title {
  font-family: var(--font-serif);
  color: var(--rose-deep);
  margin-bottom: 1rem;
}

.event-card__time,
.event-card__location {
  color: var(--ink-muted);
  margin-bottom: 0.5rem;
}

.event-card__actions {
  display: flex;
  justify-content: center;
  gap: 0.75rem;
  margin-top: 1.25rem;
}

/* === Buttons === */
.btn-primary,
.btn-secondary {
  padding: 0.7rem 1.4rem;
  border-radius: 999px;
  font-family: var(--font-sans);
  font-size: 0.9rem;
  cursor: pointer;
  transition: transform var(--transition-fast), box-shadow var(--transition-fast);
}

.btn-primary {
  border: none;
  background: var(--rose);
  color: #fff;
}

.btn-secondary {
  border: 1px solid var(--rose);
  background: transparent;
  color: var(--rose);
}

.btn-primary:hover,
.btn-secondary:hover {
  transform: translateY(-2px);
  box-shadow: var(--shadow);
}

/* === Gallery === */
.gallery-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(140px, 1fr));
  gap: 0.75rem;
}

.gallery-item {
  position: relative;
  aspect-ratio: 1;
  overflow: hidden;
  border-radius: 10px;
  background: var(--blush);
  opacity: 0;
  transform: scale(0.95);
  transition: opacity var(--transition-slow), transform var(--transition-slow);
}

.gallery-item.has-image {
  cursor: pointer;
}

.gallery-item.loaded {
  opacity: 1;
  transform: scale(1);
}

.gallery-item img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  opacity: 0;
  transition: opacity var(--transition-slow), transform var(--transition-normal);
}

.gallery-item img.image-loaded {
  opacity: 1;
}

.gallery-item:hover img {
  transform: scale(1.05);
}

/* === Lightbox === */
.lightbox {
  position: fixed;
  inset: 0;
  z-index: 1000;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(0, 0, 0, 0.92);
  opacity: 0;
  visibility: hidden;
  transition: opacity var(--transition-normal), visibility var(--transition-normal);
}

.lightbox.active {
  opacity: 1;
  visibility: visible;
}

.lightbox-content {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.75rem;
  max-width: 90vw;
}

#lightboxImage {
  max-width: 90vw;
  max-height: 70vh;
  object-fit: contain;
  border-radius: 6px;
  transition: opacity var(--transition-normal);
}

.lightbox-counter {
  color: rgba(255, 255, 255, 0.8);
  font-size: 0.9rem;
  letter-spacing: 0.1em;
}

.lightbox-close,
.lightbox-nav {
  position: absolute;
  border: none;
  background: none;
  color: #fff;
  cursor: pointer;
}

.lightbox-close {
  top: 1rem;
  right: 1.25rem;
  font-size: 2.5rem;
}

.lightbox-nav {
  top: 50%;
  transform: translateY(-50%);
  font-size: 3rem;
  padding: 0 1rem;
}

.lightbox-prev { left: 0.5rem; }
.lightbox-next { right: 0.5rem; }

.lightbox-thumbnails {
  display: flex;
  gap: 0.5rem;
  max-width: 90vw;
  overflow-x: auto;
  padding: 0.25rem;
}

.lightbox-thumbnail {
  flex: 0 0 auto;
  width: 60px;
  height: 60px;
  object-fit: cover;
  border: 2px solid transparent;
  border-radius: 6px;
  opacity: 0.5;
  cursor: pointer;
  transition: opacity var(--transition-fast), border-color var(--transition-fast);
}

.lightbox-thumbnail.active {
  border-color: var(--gold);
  opacity: 1;
}

/* === Guestbook === */
.guestbook-form,
.modal-form {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
  max-width: 480px;
  margin: 0 auto;
}

.form-input {
  padding: 0.75rem 1rem;
  border: 1px solid var(--gold-soft);
  border-radius: 10px;
  background: #fff;
  font-family: var(--font-sans);
  font-size: 0.95rem;
  color: var(--ink);
}

.form-input:focus {
  outline: none;
  border-color: var(--rose);
}

.form-textarea {
  resize: vertical;
}

.guestbook-actions {
  display: flex;
  justify-content: center;
  gap: 0.75rem;
  margin-top: 1.5rem;
}

/* === Modals === */
.modal {
  position: fixed;
  inset: 0;
  z-index: 900;
  display: none;
  align-items: center;
  justify-content: center;
  background: rgba(61, 44, 46, 0.5);
}

.modal.active {
  display: flex;
}

.modal-content {
  position: relative;
  width: min(90vw, 420px);
  padding: 2rem 1.5rem;
  border-radius: 16px;
  background: var(--ivory);
  box-shadow: var(--shadow);
  animation: modal-in var(--transition-normal);
}

.modal-close {
  position: absolute;
  top: 0.5rem;
  right: 0.75rem;
  border: none;
  background: none;
  font-size: 1.75rem;
  color: var(--ink-muted);
  cursor: pointer;
}

.modal-title {
  font-family: var(--font-serif);
  color: var(--rose-deep);
  text-align: center;
  margin-bottom: 1.25rem;
}

@keyframes modal-in {
  from { opacity: 0; transform: translateY(20px); }
  to { opacity: 1; transform: translateY(0); }
}

/* === Notifications === */
.notification-stack {
  position: fixed;
  top: 5rem;
  right: 1rem;
  z-index: 1100;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.notification {
  padding: 0.9rem 1.25rem;
  border-radius: 10px;
  color: #fff;
  box-shadow: var(--shadow);
  animation: slide-in-right 300ms ease;
}

.notification.leaving {
  animation: slide-out-right 300ms ease forwards;
}

@keyframes slide-in-right {
  from { transform: translateX(120%); opacity: 0; }
  to { transform: translateX(0); opacity: 1; }
}

@keyframes slide-out-right {
  from { transform: translateX(0); opacity: 1; }
  to { transform: translateX(120%); opacity: 0; }
}

/* === Falling hearts === */
.hearts-layer {
  position: fixed;
  inset: 0;
  z-index: 50;
  pointer-events: none;
  overflow: hidden;
}

.falling-heart {
  position: absolute;
  top: -40px;
  color: var(--rose);
  opacity: 0.7;
  animation-name: fall;
  animation-timing-function: linear;
  animation-fill-mode: forwards;
}

@keyframes fall {
  to { transform: translateY(110vh) rotate(360deg); opacity: 0; }
}

/* === Scroll reveal === */
.animate-on-scroll.fade-in-up {
  opacity: 0;
  transform: translateY(40px);
}

.animate-on-scroll.slide-in-left {
  opacity: 0;
  transform: translateX(-60px);
}

.animate-on-scroll.slide-in-right {
  opacity: 0;
  transform: translateX(60px);
}

.animate-on-scroll {
  transition: opacity 0.8s ease, transform 0.8s ease;
}

.animate-on-scroll.animated {
  opacity: 1;
  transform: none;
}

/* === Footer === */
.footer {
  padding: 3rem 1.5rem;
  text-align: center;
  background: var(--ink);
  color: var(--ivory);
  font-family: var(--font-script);
  font-size: 1.8rem;
}

.footer-note {
  margin-top: 0.5rem;
  font-family: var(--font-sans);
  font-size: 0.85rem;
  opacity: 0.7;
}

@media (prefers-reduced-motion: reduce) {
  *, *::before, *::after {
    animation-duration: 0.01ms !important;
    transition-duration: 0.01ms !important;
  }
}
"#;
