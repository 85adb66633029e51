//! Global CSS styles for the portfolio page.
//!
//! Night-sky aesthetic: dark background, violet/cyan gradient accents,
//! twinkling star field behind every section.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Backgrounds */
  --night: #0b0d17;
  --night-card: #131726;
  --night-border: #232a3f;

  /* Accents */
  --violet: #8b5cf6;
  --cyan: #22d3ee;
  --green: #4ade80;

  /* Text */
  --text-primary: #f1f5f9;
  --text-secondary: rgba(241, 245, 249, 0.75);
  --text-muted: rgba(241, 245, 249, 0.5);

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', Helvetica, Arial, sans-serif;

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
  scroll-behavior: smooth;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  background: var(--night);
  color: var(--text-primary);
  line-height: 1.7;
  min-height: 100vh;
}

.page {
  position: relative;
  overflow-x: hidden;
}

/* === Star Field === */
.stars-background {
  position: fixed;
  inset: 0;
  z-index: 0;
  pointer-events: none;
}

.star {
  position: absolute;
  border-radius: 50%;
  background: var(--text-primary);
  opacity: 0.8;
  animation-name: twinkle;
  animation-iteration-count: infinite;
  animation-timing-function: ease-in-out;
}

@keyframes twinkle {
  0%, 100% { opacity: 0.2; }
  50% { opacity: 0.9; }
}

/* === Gradient Accent === */
.gradient-text {
  background: linear-gradient(90deg, var(--violet), var(--cyan));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

/* === Navigation === */
.nav-header {
  position: fixed;
  top: 0;
  width: 100%;
  z-index: 50;
  background: rgba(11, 13, 23, 0.95);
  backdrop-filter: blur(6px);
  border-bottom: 1px solid var(--night-border);
}

.nav-inner {
  max-width: 72rem;
  margin: 0 auto;
  padding: 0 1.5rem;
  height: 4rem;
  display: flex;
  justify-content: space-between;
  align-items: center;
}

.nav-monogram {
  font-size: 1.5rem;
  font-weight: 700;
  background: linear-gradient(90deg, var(--violet), var(--cyan));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.nav-links {
  display: flex;
  gap: 2rem;
}

.nav-link {
  color: var(--text-primary);
  text-decoration: none;
  transition: color var(--transition-fast);
}

.nav-link:hover {
  color: var(--violet);
}

/* === Social Sidebar === */
.social-sidebar {
  position: fixed;
  right: 1.5rem;
  top: 50%;
  transform: translateY(-50%);
  z-index: 40;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1rem;
}

.sidebar-rule {
  width: 1px;
  height: 5rem;
  background: var(--night-border);
}

.social-link {
  color: var(--text-secondary);
  text-decoration: none;
  font-size: 0.8rem;
  writing-mode: vertical-rl;
  transition: color var(--transition-fast), transform var(--transition-fast);
}

.social-link:hover {
  color: var(--violet);
  transform: translateY(-3px);
}

/* === Sections === */
.section-inner {
  max-width: 72rem;
  margin: 0 auto;
  padding: 5rem 1.5rem;
  position: relative;
  z-index: 1;
}

.section-alt {
  background: rgba(19, 23, 38, 0.3);
}

.section-title {
  font-size: 2.25rem;
  font-weight: 700;
  text-align: center;
  margin-bottom: 3rem;
}

/* === Hero === */
.hero {
  min-height: 100vh;
  display: flex;
  align-items: center;
  padding-top: 4rem;
}

.hero-inner {
  max-width: 72rem;
  margin: 0 auto;
  padding: 0 1.5rem;
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 3rem;
  align-items: center;
  position: relative;
  z-index: 1;
}

.hero-title {
  font-size: 3.5rem;
  font-weight: 700;
  line-height: 1.15;
  margin-bottom: 1.5rem;
}

.hero-headline {
  font-size: 1.4rem;
  color: var(--text-secondary);
  margin-bottom: 2rem;
}

.hero-tagline {
  font-size: 1.05rem;
  color: var(--text-muted);
  margin-bottom: 3rem;
  max-width: 36rem;
}

.hero-actions {
  display: flex;
  flex-wrap: wrap;
  gap: 1rem;
}

.btn-primary {
  display: inline-block;
  background: var(--violet);
  color: var(--text-primary);
  padding: 0.75rem 2rem;
  border: none;
  border-radius: 0.5rem;
  font-weight: 600;
  font-size: 1rem;
  text-decoration: none;
  cursor: pointer;
  transition: background var(--transition-fast);
}

.btn-primary:hover {
  background: #7c4ee8;
}

.btn-outline {
  display: inline-block;
  border: 1px solid var(--violet);
  color: var(--text-primary);
  padding: 0.75rem 2rem;
  border-radius: 0.5rem;
  font-weight: 600;
  text-decoration: none;
  transition: background var(--transition-fast);
}

.btn-outline:hover {
  background: rgba(139, 92, 246, 0.1);
}

.hero-portrait {
  position: relative;
  display: flex;
  justify-content: center;
}

.portrait-glow {
  position: absolute;
  inset: 0;
  background: rgba(139, 92, 246, 0.2);
  filter: blur(60px);
  border-radius: 50%;
}

.portrait-image {
  position: relative;
  z-index: 1;
  width: 18rem;
  height: 18rem;
  object-fit: cover;
  border-radius: 1rem;
  border: 2px solid var(--night-border);
}

/* === About === */
.about-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 3rem;
  align-items: center;
}

.about-paragraph {
  font-size: 1.05rem;
  margin-bottom: 1.5rem;
}

.info-panel {
  background: var(--night-card);
  border: 1px solid var(--night-border);
  border-radius: 0.5rem;
  padding: 2rem;
}

.info-title {
  font-size: 1.4rem;
  font-weight: 700;
  margin-bottom: 1.5rem;
}

.info-row {
  margin-bottom: 1rem;
}

.info-label {
  color: var(--text-muted);
  font-size: 0.9rem;
}

.info-value {
  color: var(--text-primary);
}

/* === Skills === */
.skills-grid {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 2rem;
}

.skill-column {
  background: var(--night-card);
  border: 1px solid var(--night-border);
  border-radius: 0.5rem;
  padding: 2rem;
}

.skill-column-title {
  font-size: 1.4rem;
  font-weight: 700;
  margin-bottom: 1.5rem;
}

.skill-icons {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 1.5rem;
}

.skill-item {
  display: flex;
  flex-direction: column;
  align-items: center;
  cursor: pointer;
}

.skill-icon {
  width: 3rem;
  height: 3rem;
  margin-bottom: 0.5rem;
  transition: transform var(--transition-fast);
}

.skill-item:hover .skill-icon {
  transform: translateY(-3px) scale(1.1);
}

.skill-name {
  font-size: 0.85rem;
  color: var(--text-muted);
}

/* === Projects === */
.projects-grid {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 2rem;
}

.project-card {
  background: var(--night-card);
  border: 1px solid var(--night-border);
  border-radius: 0.5rem;
  padding: 1.5rem;
  cursor: pointer;
  transition: border-color var(--transition-normal), transform var(--transition-normal);
}

.project-card:hover {
  border-color: rgba(139, 92, 246, 0.5);
  transform: translateY(-0.5rem);
}

.card-title {
  font-size: 1.2rem;
  font-weight: 700;
  color: var(--violet);
  margin-bottom: 0.75rem;
}

.card-description {
  color: var(--text-secondary);
  font-size: 0.9rem;
  margin-bottom: 1rem;
  display: -webkit-box;
  -webkit-line-clamp: 2;
  -webkit-box-orient: vertical;
  overflow: hidden;
}

.card-logos {
  display: flex;
  flex-wrap: wrap;
  gap: 0.75rem;
  margin-bottom: 1rem;
}

.card-logo {
  width: 2rem;
  height: 2rem;
}

.card-tags {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
}

.tag {
  background: var(--night);
  border: 1px solid var(--night-border);
  border-radius: 999px;
  padding: 0.2rem 0.75rem;
  font-size: 0.75rem;
}

.card-more {
  background: none;
  border: none;
  color: var(--violet);
  font-size: 0.8rem;
  font-weight: 500;
  cursor: pointer;
  margin-top: 1rem;
  padding: 0;
}

/* === Modal === */
.modal-overlay {
  position: fixed;
  inset: 0;
  z-index: 60;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 1rem;
  background: rgba(0, 0, 0, 0.7);
  backdrop-filter: blur(4px);
}

.project-modal {
  background: var(--night-card);
  width: 100%;
  max-width: 42rem;
  border: 1px solid var(--night-border);
  border-radius: 0.5rem;
  box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
  overflow: hidden;
}

.modal-header {
  padding: 1.5rem;
  border-bottom: 1px solid var(--night-border);
  display: flex;
  justify-content: space-between;
  align-items: center;
}

.modal-title {
  font-size: 1.5rem;
  font-weight: 700;
}

.modal-close {
  background: none;
  border: none;
  color: var(--text-muted);
  font-size: 1.5rem;
  line-height: 1;
  cursor: pointer;
  transition: color var(--transition-fast);
}

.modal-close:hover {
  color: var(--text-primary);
}

.modal-body {
  padding: 1.5rem;
  overflow-y: auto;
  max-height: 70vh;
}

.modal-section {
  margin-bottom: 1.5rem;
}

.modal-section-title {
  font-size: 1.1rem;
  font-weight: 600;
  margin-bottom: 0.5rem;
}

.modal-objectives {
  color: var(--text-secondary);
}

.modal-requirements {
  list-style: disc inside;
  color: var(--text-secondary);
  font-size: 0.9rem;
}

.modal-requirements li {
  margin-bottom: 0.5rem;
}

.modal-footer {
  padding: 1.5rem;
  border-top: 1px solid var(--night-border);
  background: rgba(11, 13, 23, 0.5);
  text-align: right;
}

/* === Contact === */
.contact-inner {
  max-width: 48rem;
  text-align: center;
}

.contact-lead {
  font-size: 1.2rem;
  color: var(--text-muted);
  margin-bottom: 3rem;
}

.contact-card {
  display: block;
  background: var(--night-card);
  border: 1px solid var(--night-border);
  border-radius: 0.5rem;
  padding: 1.5rem;
  margin-bottom: 1.5rem;
  text-decoration: none;
  transition: background var(--transition-fast);
}

.contact-card:hover {
  background: rgba(19, 23, 38, 0.8);
}

.contact-label {
  font-size: 0.85rem;
  color: var(--text-muted);
  margin-bottom: 0.5rem;
}

.contact-value {
  font-size: 1.1rem;
  color: var(--violet);
}

.contact-socials {
  display: flex;
  justify-content: center;
  gap: 1.5rem;
  padding-top: 1.5rem;
}

.contact-social {
  background: var(--night-card);
  border: 1px solid var(--night-border);
  border-radius: 0.5rem;
  padding: 1rem 1.5rem;
  color: var(--text-primary);
  text-decoration: none;
  transition: background var(--transition-fast);
}

.contact-social:hover {
  background: rgba(19, 23, 38, 0.8);
}

/* === Footer === */
.footer {
  padding: 2rem 1.5rem;
  border-top: 1px solid var(--night-border);
  text-align: center;
  color: var(--text-muted);
  position: relative;
  z-index: 1;
}
"#;
