//! Global CSS styles for Hero Gallery.
//!
//! Dark terminal palette with gold accents; the detail card tilts in 3D.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* VOID (Backgrounds) */
  --void-black: #0a0a0a;
  --void-lighter: #0a0e0f;
  --void-border: #1a1a1a;

  /* CYAN (Links, Focus) */
  --cyan: #00d4aa;
  --cyan-glow: rgba(0, 212, 170, 0.3);

  /* GOLD (Titles, Highlights) */
  --gold: #d4af37;
  --gold-glow: rgba(212, 175, 55, 0.3);

  /* TEXT */
  --text-primary: #f5f5f5;
  --text-secondary: rgba(245, 245, 245, 0.7);
  --text-muted: rgba(245, 245, 245, 0.5);

  /* Typography */
  --font-serif: 'Cormorant Garamond', Georgia, serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-3xl: 3rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: var(--font-mono);
  background: var(--void-black);
  color: var(--text-primary);
  line-height: 1.7;
  min-height: 100vh;
}

/* === Layout === */
.gallery-app {
  max-width: 1200px;
  margin: 0 auto;
  padding: 1.5rem;
}

.gallery-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  flex-wrap: wrap;
  gap: 1rem;
  margin-bottom: 1.5rem;
}

.page-title {
  font-family: var(--font-serif);
  font-size: var(--text-3xl);
  font-weight: 400;
  color: var(--gold);
  text-shadow: 0 0 30px var(--gold-glow);
  letter-spacing: 0.1em;
}

/* === Toolbar === */
.toolbar {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.toolbar__status {
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

.btn-primary,
.btn-secondary {
  font-family: var(--font-mono);
  font-size: var(--text-sm);
  padding: 0.5rem 1rem;
  border-radius: 4px;
  cursor: pointer;
  text-decoration: none;
  transition: all var(--transition-fast);
}

.btn-primary {
  background: transparent;
  border: 1px solid var(--gold);
  color: var(--gold);
}

.btn-primary:hover:not(:disabled) {
  background: var(--gold-glow);
  box-shadow: 0 0 15px var(--gold-glow);
}

.btn-primary:disabled {
  opacity: 0.5;
  cursor: wait;
}

.btn-secondary {
  background: transparent;
  border: 1px solid var(--void-border);
  color: var(--text-secondary);
}

.btn-secondary:hover {
  border-color: var(--cyan);
  color: var(--cyan);
}

/* === Hero Grid === */
.hero-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(140px, 1fr));
  gap: 1rem;
}

.hero-grid__empty {
  padding: 4rem 0;
  text-align: center;
  color: var(--text-muted);
}

.hero-tile {
  position: relative;
  aspect-ratio: 1 / 1.4;
  border: 1px solid var(--void-border);
  border-radius: 6px;
  overflow: hidden;
  cursor: pointer;
  background: var(--void-lighter);
  transition: transform var(--transition-fast), border-color var(--transition-fast);
}

.hero-tile:hover,
.hero-tile:focus {
  outline: none;
  transform: translateY(-3px);
  border-color: var(--gold);
  box-shadow: 0 0 20px var(--gold-glow);
}

.hero-tile__img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  display: block;
}

.hero-tile__name {
  position: absolute;
  left: 0;
  right: 0;
  bottom: 0;
  padding: 0.4rem 0.6rem;
  font-size: var(--text-sm);
  background: linear-gradient(transparent, rgba(10, 10, 10, 0.9));
  white-space: nowrap;
  overflow: hidden;
  text-overflow: ellipsis;
}

/* === Detail Modal === */
.hero-modal[aria-hidden="true"] {
  display: none;
}

.hero-modal {
  position: fixed;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 1000;
}

.hero-modal__backdrop {
  position: absolute;
  inset: 0;
  background: rgba(0, 0, 0, 0.85);
  backdrop-filter: blur(4px);
}

.hero-modal__card {
  position: relative;
  width: min(720px, 92vw);
  perspective: 1200px;
  outline: none;
  opacity: 0;
  transform: translateY(24px) scale(0.96);
  transition: opacity var(--transition-normal), transform var(--transition-normal);
}

.hero-modal__card.open.animate-in {
  opacity: 1;
  transform: none;
}

.hero-modal__close {
  position: absolute;
  top: -0.5rem;
  right: -0.5rem;
  z-index: 2;
  width: 2rem;
  height: 2rem;
  border-radius: 50%;
  border: 1px solid var(--gold);
  background: var(--void-black);
  color: var(--gold);
  font-size: var(--text-lg);
  cursor: pointer;
}

.card3d {
  transform-style: preserve-3d;
  transition: transform 80ms linear;
}

.card-front {
  display: grid;
  grid-template-columns: 38.2% 61.8%;
  background: var(--void-black);
  border: 2px solid var(--gold);
  box-shadow: 0 0 40px var(--gold-glow);
  border-radius: 8px;
  overflow: hidden;
}

.hero-modal__img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  display: block;
}

.hero-modal__info {
  padding: 1.5rem;
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.hero-modal__name {
  font-family: var(--font-serif);
  font-size: var(--text-xl);
  font-weight: 400;
  color: var(--gold);
}

.hero-modal__role {
  color: var(--cyan);
  font-size: var(--text-sm);
}

.hero-modal__desc {
  color: var(--text-secondary);
}

.modal-actions {
  display: flex;
  gap: 0.75rem;
  margin-top: auto;
}
"#;
